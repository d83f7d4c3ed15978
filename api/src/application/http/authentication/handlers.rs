pub mod get_user;
pub mod login;
pub mod logout;
pub mod register;
