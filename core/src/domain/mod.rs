pub mod authentication;
pub mod category;
pub mod common;
pub mod crypto;
pub mod filter;
pub mod health;
pub mod product;
pub mod user;
