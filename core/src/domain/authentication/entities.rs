use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    user::entities::{Role, User},
};

pub const TOKEN_TYPE: &str = "Bearer";
pub const DEFAULT_TOKEN_NAME: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: String,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
    pub role: Role,
}

impl JwtClaim {
    pub fn new(user: &User, token: &AccessToken) -> Self {
        Self {
            sub: user.id.to_string(),
            jti: token.id,
            iat: token.created_at.timestamp(),
            exp: token.expires_at.timestamp(),
            role: user.role,
        }
    }

    pub fn user_id(&self) -> Result<i64, CoreError> {
        self.sub.parse().map_err(|_| CoreError::Unauthorized)
    }
}

/// Server-side record of an issued token. Deleting it revokes the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(user_id: i64, name: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            user_id,
            name: name.into(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

pub struct AuthorizeRequestInput {
    pub token: String,
}

pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 42,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_claim_mirrors_token() {
        let token = AccessToken::new(42, DEFAULT_TOKEN_NAME, Duration::minutes(30));
        let claim = JwtClaim::new(&user(Role::Admin), &token);

        assert_eq!(claim.sub, "42");
        assert_eq!(claim.user_id(), Ok(42));
        assert_eq!(claim.jti, token.id);
        assert_eq!(claim.exp - claim.iat, 30 * 60);
        assert_eq!(claim.role, Role::Admin);
    }

    #[test]
    fn test_token_expiry() {
        let token = AccessToken::new(1, DEFAULT_TOKEN_NAME, Duration::minutes(5));

        assert!(!token.is_expired(token.created_at));
        assert!(token.is_expired(token.created_at + Duration::minutes(5)));
    }

    #[test]
    fn test_non_numeric_subject_is_unauthorized() {
        let token = AccessToken::new(1, DEFAULT_TOKEN_NAME, Duration::minutes(5));
        let mut claim = JwtClaim::new(&user(Role::User), &token);
        claim.sub = "abc".to_string();

        assert_eq!(claim.user_id(), Err(CoreError::Unauthorized));
    }
}
