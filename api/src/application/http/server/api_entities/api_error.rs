use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    UnprocessableEntity {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Forbidden(_) => ApiError::Forbidden("Forbidden".to_string()),
            CoreError::Unauthorized | CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Unauthorized".to_string())
            }
            CoreError::TokenExpired => ApiError::Unauthorized("Token expired".to_string()),
            CoreError::Validation(message) => ApiError::validation(message),
            CoreError::InvalidFilter(_) => ApiError::BadRequest(error.to_string()),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::Configuration(ref message) => {
                error!("Configuration error while serving request: {}", message);
                ApiError::InternalServerError("Internal server error".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        collect_field_errors(&errors, None, &mut fields);

        ApiError::UnprocessableEntity {
            message: "The given data was invalid.".to_string(),
            errors: fields,
        }
    }
}

/// Flattens nested validation errors into `field` / `parent.0.field` keys.
fn collect_field_errors(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(key).or_default();
                for field_error in field_errors {
                    messages.push(
                        field_error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("The {field} field is invalid.")),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(inner, Some(&key), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(inner, Some(&format!("{key}.{index}")), out);
                }
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::UnprocessableEntity { message, errors } => ErrorBody {
                error: message,
                errors: (!errors.is_empty()).then_some(errors),
            },
            other => ErrorBody {
                error: other.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(e) => ApiError::validation(e.body_text()),
                other => ApiError::BadRequest(other.body_text()),
            })?;

        value.validate()?;
        Ok(ValidateJson(value))
    }
}
