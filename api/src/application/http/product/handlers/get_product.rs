use axum::extract::{Path, State};
use catalog_core::domain::product::{ports::ProductService, value_objects::GetProductInput};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        product::resources::ProductResource,
        server::{
            api_entities::{
                api_error::ApiError,
                response::{ApiMessage, Response},
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    params(("product_id" = i64, Path, description = "Product id")),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<ProductResource>),
        (status = 404, description = "Product not found"),
    ),
)]
pub async fn get_product(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApiMessage<ProductResource>>, ApiError> {
    let product = state
        .service
        .get_product(identity, GetProductInput { product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "Product retrieved successfully",
        ProductResource::from(product),
    )))
}
