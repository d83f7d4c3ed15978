pub mod api_entities;
pub mod app_state;
pub mod http_server;
pub mod openapi;

#[cfg(test)]
pub(crate) mod test_support;
