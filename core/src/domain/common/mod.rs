use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod policies;
pub mod services;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Stores `value` in `slot` and reports whether it differed from what was there.
pub fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Converts a client-supplied amount into a two-decimal money value.
pub fn money(amount: f64) -> Result<Decimal, CoreError> {
    Decimal::from_f64(amount)
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| CoreError::Validation(format!("{amount} is not a valid amount")))
}
