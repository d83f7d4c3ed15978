use axum::extract::State;
use catalog_core::domain::authentication::ports::AuthService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogoutResponse {
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub logout_time: String,
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    description = "Revokes every access token of the current user.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<LogoutResponse>),
        (status = 401, description = "Unauthorized"),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApiMessage<LogoutResponse>>, ApiError> {
    let output = state
        .service
        .logout(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "You have successfully logged out. All access tokens have been revoked.",
        LogoutResponse {
            logout_time: output.logout_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        },
    )))
}
