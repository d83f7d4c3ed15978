use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: a human readable message and an optional payload.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiMessage<T> {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
}

impl<T> ApiMessage<T> {
    pub fn new(message: impl Into<String>, response: T) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
        }
    }
}

impl ApiMessage<Empty> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }
}

/// Payload type of messages that carry no `response`.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Empty {}

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}
