use crate::domain::{
    authentication::ports::{AccessTokenRepository, TokenSigner},
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    product::ports::ProductRepository,
    user::ports::UserRepository,
};

impl<U, AT, C, P, H, T, HC> HealthCheckService for Service<U, AT, C, P, H, T, HC>
where
    U: UserRepository,
    AT: AccessTokenRepository,
    C: CategoryRepository,
    P: ProductRepository,
    H: HasherRepository,
    T: TokenSigner,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
