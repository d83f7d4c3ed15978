use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserCredentials},
        ports::UserRepository,
        value_objects::CreateUserRequest,
    },
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let now = Utc::now().naive_utc();

        let user = UserEntity::insert(UserActiveModel {
            name: Set(request.name),
            email: Set(request.email),
            password: Set(request.password_hash),
            role: Set(request.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CoreError::Validation("The email has already been taken.".to_string())
            }
            _ => {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(user)
    }

    async fn get_by_id(&self, user_id: i64) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_credentials_by_email(
        &self,
        email: String,
    ) -> Result<Option<UserCredentials>, CoreError> {
        let credentials = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserCredentials::from);

        Ok(credentials)
    }
}
