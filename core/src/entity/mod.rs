//! `SeaORM` entities for the catalog schema.

pub mod prelude;

pub mod categories;
pub mod personal_access_tokens;
pub mod products;
pub mod users;
