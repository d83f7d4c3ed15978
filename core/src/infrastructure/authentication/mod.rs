pub mod access_token_repository;
pub mod jwt;
pub mod mappers;
