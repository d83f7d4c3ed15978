use chrono::Duration;
use tracing::info;

use crate::{
    domain::common::{
        CatalogConfig,
        entities::app_errors::CoreError,
        services::{ResourceFilters, Service},
    },
    infrastructure::{
        authentication::{
            access_token_repository::PostgresAccessTokenRepository, jwt::JwtTokenSigner,
        },
        category::repositories::category_repository::PostgresCategoryRepository,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::repository::PostgresHealthCheckRepository,
        product::repositories::product_repository::PostgresProductRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type CatalogService = Service<
    PostgresUserRepository,
    PostgresAccessTokenRepository,
    PostgresCategoryRepository,
    PostgresProductRepository,
    Argon2HasherRepository,
    JwtTokenSigner,
    PostgresHealthCheckRepository,
>;

/// Connects to the database, applies pending migrations and wires every repository.
pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let filters = ResourceFilters::load()?;
    let token_signer = JwtTokenSigner::new(&config.auth.jwt_secret)?;

    if config.auth.token_ttl_minutes <= 0 {
        return Err(CoreError::Configuration(
            "the token TTL must be a positive number of minutes".to_string(),
        ));
    }

    info!(
        token_ttl_minutes = config.auth.token_ttl_minutes,
        "catalog service initialized"
    );

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresAccessTokenRepository::new(postgres.get_db()),
        PostgresCategoryRepository::new(postgres.get_db()),
        PostgresProductRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        token_signer,
        PostgresHealthCheckRepository::new(postgres.get_db()),
        filters,
        Duration::minutes(config.auth.token_ttl_minutes),
    ))
}
