use axum::extract::State;
use catalog_core::domain::category::{
    ports::CategoryService, value_objects::BulkCreateCategoriesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        category::validators::{BulkCreateCategoriesValidator, CreateCategoryValidator},
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
pub struct BulkCreateCategoriesResponse {
    pub ids: Vec<i64>,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "category",
    summary = "Bulk create categories",
    description = "Creates every category in the array or none of them. Requires the admin role.",
    security(("bearer" = [])),
    request_body = Vec<CreateCategoryValidator>,
    responses(
        (status = 201, body = ApiMessage<BulkCreateCategoriesResponse>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn bulk_create_categories(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkCreateCategoriesValidator>,
) -> Result<Response<ApiMessage<BulkCreateCategoriesResponse>>, ApiError> {
    let ids = state
        .service
        .bulk_create_categories(
            identity,
            BulkCreateCategoriesInput {
                categories: payload.categories.into_iter().map(Into::into).collect(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ApiMessage::new(
        "Categories created successfully!!",
        BulkCreateCategoriesResponse { ids },
    )))
}
