pub mod api_error;
pub mod nullable;
pub mod response;
