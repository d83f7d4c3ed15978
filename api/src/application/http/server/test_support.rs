use std::sync::Arc;

use catalog_core::{
    domain::common::services::{ResourceFilters, Service},
    infrastructure::{
        authentication::{
            access_token_repository::PostgresAccessTokenRepository, jwt::JwtTokenSigner,
        },
        category::repositories::category_repository::PostgresCategoryRepository,
        crypto::argon2_hasher::Argon2HasherRepository,
        health::repository::PostgresHealthCheckRepository,
        product::repositories::product_repository::PostgresProductRepository,
        user::repository::PostgresUserRepository,
    },
};
use chrono::Duration;
use clap::Parser;
use sea_orm::DatabaseConnection;

use super::app_state::AppState;
use crate::args::Args;

/// State backed by a disconnected database. Good for every path that is rejected before a
/// repository is reached: authentication, body validation and routing.
pub fn test_state() -> AppState {
    let args = Args::parse_from(["catalog-api", "--jwt-secret", "test-secret"]);
    let db = DatabaseConnection::default();

    let service = Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresAccessTokenRepository::new(db.clone()),
        PostgresCategoryRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenSigner::new("test-secret").unwrap(),
        PostgresHealthCheckRepository::new(db),
        ResourceFilters::load().unwrap(),
        Duration::minutes(60),
    );

    AppState::new(Arc::new(args), service)
}
