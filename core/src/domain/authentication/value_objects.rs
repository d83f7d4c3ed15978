use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::user::entities::{Role, User};

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: User,
    pub token_id: Uuid,
}

impl Identity {
    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub user: User,
    pub token_type: String,
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub struct LogoutOutput {
    pub logout_time: DateTime<Utc>,
    pub revoked_tokens: u64,
}
