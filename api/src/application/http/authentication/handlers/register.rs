use axum::extract::State;
use catalog_core::domain::{authentication::ports::AuthService, user::entities::User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        authentication::validators::RegisterValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::{ApiMessage, Response},
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a user",
    description = "Creates a user account. The admin role is granted only when the caller is an authenticated admin.",
    request_body = RegisterValidator,
    responses(
        (status = 200, body = ApiMessage<RegisterResponse>),
        (status = 422, description = "Validation failed or email already taken"),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    OptionalIdentity(caller): OptionalIdentity,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<ApiMessage<RegisterResponse>>, ApiError> {
    let user = state
        .service
        .register(caller, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "User created successfully",
        RegisterResponse { data: user },
    )))
}
