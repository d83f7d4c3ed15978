use axum::extract::State;
use catalog_core::domain::product::{
    ports::ProductService, value_objects::BulkCreateProductsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        product::validators::{BulkCreateProductsValidator, CreateProductValidator},
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
pub struct BulkCreateProductsResponse {
    pub ids: Vec<i64>,
}

#[utoipa::path(
    post,
    path = "/bulk",
    tag = "product",
    summary = "Bulk create products",
    description = "Creates every product in the array or none of them. Requires the admin role.",
    security(("bearer" = [])),
    request_body = Vec<CreateProductValidator>,
    responses(
        (status = 201, body = ApiMessage<BulkCreateProductsResponse>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn bulk_create_products(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BulkCreateProductsValidator>,
) -> Result<Response<ApiMessage<BulkCreateProductsResponse>>, ApiError> {
    let ids = state
        .service
        .bulk_create_products(
            identity,
            BulkCreateProductsInput {
                products: payload.products.into_iter().map(Into::into).collect(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ApiMessage::new(
        "Products created successfully!!",
        BulkCreateProductsResponse { ids },
    )))
}
