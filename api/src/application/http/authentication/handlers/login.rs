use axum::extract::State;
use catalog_core::domain::{authentication::ports::AuthService, user::entities::User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{ApiMessage, Response},
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub data: User,
    pub token_type: String,
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Exchanges an email and password for a bearer token.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = ApiMessage<LoginResponse>),
        (status = 401, description = "Unknown email or wrong password"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<ApiMessage<LoginResponse>>, ApiError> {
    let output = state
        .service
        .login(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        format!("Welcome {}!!!", output.user.name),
        LoginResponse {
            data: output.user,
            token_type: output.token_type,
            access_token: output.access_token,
        },
    )))
}
