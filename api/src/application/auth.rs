use std::convert::Infallible;

use axum::{
    RequestExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use catalog_core::domain::{
    authentication::{
        entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Why a presented bearer token did not yield an identity.
#[derive(Debug, Clone)]
pub struct RejectedToken(pub CoreError);

/// Optional auth middleware: a valid bearer token attaches its [`Identity`] to the request,
/// anything else lets the request through anonymously.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Ok(TypedHeader(Authorization(bearer))) = req
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        && !bearer.token().is_empty()
    {
        let output = state
            .service
            .authorize_request(AuthorizeRequestInput {
                token: bearer.token().to_string(),
            })
            .await;

        match output {
            Ok(output) => {
                req.extensions_mut().insert(output.identity);
            }
            Err(e) => {
                debug!("bearer token rejected: {}", e);
                req.extensions_mut().insert(RejectedToken(e));
            }
        }
    }

    Ok(next.run(req).await)
}

/// Identity of the caller; rejects the request with 401 when there is none.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        match parts.extensions.get::<RejectedToken>() {
            Some(RejectedToken(CoreError::TokenExpired)) => {
                Err(ApiError::Unauthorized("Token expired".to_string()))
            }
            _ => Err(ApiError::Unauthorized("Unauthorized".to_string())),
        }
    }
}

/// Identity of the caller when one was authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
