use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::{AccessToken, AuthorizeRequestInput, AuthorizeRequestOutput, JwtClaim},
        value_objects::{Identity, LoginInput, LoginOutput, LogoutOutput, RegisterInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    /// `caller` is the identity attached to the request, if any. Only an admin caller may
    /// create another admin.
    fn register(
        &self,
        caller: Option<Identity>,
        input: RegisterInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    fn get_current_user(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn logout(&self, identity: Identity) -> impl Future<Output = Result<LogoutOutput, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AccessTokenRepository: Send + Sync {
    fn create(&self, token: AccessToken) -> impl Future<Output = Result<AccessToken, CoreError>> + Send;

    fn get_by_id(
        &self,
        token_id: Uuid,
    ) -> impl Future<Output = Result<Option<AccessToken>, CoreError>> + Send;

    /// Deletes every token of the user and returns how many were removed.
    fn revoke_all_for_user(&self, user_id: i64) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &JwtClaim) -> Result<String, CoreError>;

    /// Checks the signature and expiry of `token` and returns its claims.
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
