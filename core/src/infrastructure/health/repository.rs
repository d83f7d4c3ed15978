use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(start.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.ping().await?;

        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            response_time_ms,
        })
    }
}
