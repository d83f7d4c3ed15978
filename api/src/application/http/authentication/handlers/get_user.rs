use axum::extract::State;
use catalog_core::domain::{authentication::ports::AuthService, user::entities::User};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::ApiError,
            response::{ApiMessage, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/user",
    tag = "auth",
    summary = "Current user",
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<User>),
        (status = 401, description = "Unauthorized"),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApiMessage<User>>, ApiError> {
    let user = state
        .service
        .get_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "User retrieved successfully",
        user,
    )))
}
