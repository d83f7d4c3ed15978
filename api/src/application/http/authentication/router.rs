use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_user::{__path_get_user, get_user},
    login::{__path_login, login},
    logout::{__path_logout, logout},
    register::{__path_register, register},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register, login, get_user, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/register"), post(register))
        .route(&format!("{root_path}/login"), post(login))
        .route(&format!("{root_path}/user"), get(get_user))
        .route(&format!("{root_path}/logout"), post(logout))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
