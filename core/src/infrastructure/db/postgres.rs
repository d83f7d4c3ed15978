use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { db })
    }

    /// Applies the SQL migrations bundled with this crate.
    pub async fn migrate(&self) -> Result<(), CoreError> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                error!("Failed to run database migrations: {}", e);
                CoreError::InternalServerError
            })?;

        info!("database migrations applied");
        Ok(())
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
