use axum::extract::State;
use catalog_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        product::validators::CreateProductValidator,
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
pub struct CreateProductResponse {
    pub product_id: i64,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Creates a product. Requires the admin role.",
    security(("bearer" = [])),
    request_body = CreateProductValidator,
    responses(
        (status = 201, body = ApiMessage<CreateProductResponse>),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<ApiMessage<CreateProductResponse>>, ApiError> {
    let product = state
        .service
        .create_product(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ApiMessage::new(
        "Product created successfully!!",
        CreateProductResponse {
            product_id: product.id,
        },
    )))
}
