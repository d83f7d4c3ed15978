pub mod authentication;
pub mod category;
pub mod crypto;
pub mod db;
pub mod filter;
pub mod health;
pub mod product;
pub mod user;
