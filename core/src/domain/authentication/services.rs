use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{
        entities::{
            AccessToken, AuthorizeRequestInput, AuthorizeRequestOutput, DEFAULT_TOKEN_NAME,
            JwtClaim, TOKEN_TYPE,
        },
        ports::{AccessTokenRepository, AuthService, TokenSigner},
        value_objects::{Identity, LoginInput, LoginOutput, LogoutOutput, RegisterInput},
    },
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    user::{
        entities::{Role, User},
        ports::UserRepository,
        value_objects::CreateUserRequest,
    },
};

impl<U, AT, C, P, H, T, HC> AuthService for Service<U, AT, C, P, H, T, HC>
where
    U: UserRepository,
    AT: AccessTokenRepository,
    C: CategoryRepository,
    P: ProductRepository,
    H: HasherRepository,
    T: TokenSigner,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, caller, input), fields(email = %input.email))]
    async fn register(
        &self,
        caller: Option<Identity>,
        input: RegisterInput,
    ) -> Result<User, CoreError> {
        let caller_is_admin = caller.as_ref().is_some_and(Identity::is_admin);
        let role = match input.role {
            Some(Role::Admin) if caller_is_admin => Role::Admin,
            Some(Role::Admin) => {
                warn!("admin role requested without an admin caller, registering as user");
                Role::User
            }
            _ => Role::User,
        };

        let password_hash = self.hasher_repository.hash_password(&input.password)?;

        let user = self
            .user_repository
            .create_user(CreateUserRequest {
                name: input.name.trim().to_string(),
                email: input.email.trim().to_lowercase(),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "user registered");
        Ok(user)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let credentials = self
            .user_repository
            .get_credentials_by_email(input.email.trim().to_lowercase())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(&input.password, &credentials.password_hash)?;
        if !valid {
            return Err(CoreError::InvalidCredentials);
        }

        let user = credentials.user;
        let token = AccessToken::new(user.id, DEFAULT_TOKEN_NAME, self.token_ttl);
        let access_token = self.token_signer.sign(&JwtClaim::new(&user, &token))?;
        self.access_token_repository.create(token).await?;

        Ok(LoginOutput {
            user,
            token_type: TOKEN_TYPE.to_string(),
            access_token,
        })
    }

    async fn get_current_user(&self, identity: Identity) -> Result<User, CoreError> {
        Ok(identity.user)
    }

    #[instrument(skip(self, identity), fields(user_id = identity.id()))]
    async fn logout(&self, identity: Identity) -> Result<LogoutOutput, CoreError> {
        let revoked_tokens = self
            .access_token_repository
            .revoke_all_for_user(identity.id())
            .await?;

        info!(revoked_tokens, "access tokens revoked");
        Ok(LogoutOutput {
            logout_time: Utc::now(),
            revoked_tokens,
        })
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_signer.verify(&input.token)?;
        let user_id = claims.user_id()?;

        let token = self
            .access_token_repository
            .get_by_id(claims.jti)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        if token.user_id != user_id {
            return Err(CoreError::Unauthorized);
        }
        if token.is_expired(Utc::now()) {
            return Err(CoreError::TokenExpired);
        }

        let user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity {
                user,
                token_id: token.id,
            },
        })
    }
}
