use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    authentication::{entities::AccessToken, ports::AccessTokenRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::personal_access_tokens::{
    ActiveModel as AccessTokenActiveModel, Column as AccessTokenColumn,
    Entity as AccessTokenEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresAccessTokenRepository {
    pub db: DatabaseConnection,
}

impl PostgresAccessTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AccessTokenRepository for PostgresAccessTokenRepository {
    async fn create(&self, token: AccessToken) -> Result<AccessToken, CoreError> {
        let created = AccessTokenEntity::insert(AccessTokenActiveModel {
            id: Set(token.id),
            user_id: Set(token.user_id),
            name: Set(token.name),
            created_at: Set(token.created_at.naive_utc()),
            expires_at: Set(token.expires_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to store access token: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(AccessToken::from(created))
    }

    async fn get_by_id(&self, token_id: Uuid) -> Result<Option<AccessToken>, CoreError> {
        let token = AccessTokenEntity::find_by_id(token_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get access token: {}", e);
                CoreError::InternalServerError
            })?
            .map(AccessToken::from);

        Ok(token)
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> Result<u64, CoreError> {
        let result = AccessTokenEntity::delete_many()
            .filter(AccessTokenColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to revoke access tokens: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
