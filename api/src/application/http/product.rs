pub mod handlers;
pub mod resources;
pub mod router;
pub mod validators;
