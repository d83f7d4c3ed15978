use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserCredentials},
        value_objects::CreateUserRequest,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Fails with `CoreError::Validation` when the email is already registered.
    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: i64) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_credentials_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<UserCredentials>, CoreError>> + Send;
}
