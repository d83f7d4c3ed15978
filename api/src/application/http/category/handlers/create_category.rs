use axum::extract::State;
use catalog_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        category::validators::CreateCategoryValidator,
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
pub struct CreateCategoryResponse {
    pub category_id: i64,
}

#[utoipa::path(
    post,
    path = "",
    tag = "category",
    summary = "Create category",
    description = "Creates a category. Requires the admin role.",
    security(("bearer" = [])),
    request_body = CreateCategoryValidator,
    responses(
        (status = 201, body = ApiMessage<CreateCategoryResponse>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCategoryValidator>,
) -> Result<Response<ApiMessage<CreateCategoryResponse>>, ApiError> {
    let category = state
        .service
        .create_category(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ApiMessage::new(
        "Category created successfully!!",
        CreateCategoryResponse {
            category_id: category.id,
        },
    )))
}
