use axum::extract::{Path, State};
use catalog_core::domain::product::{ports::ProductService, value_objects::DeleteProductInput};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::ApiError,
            response::{ApiMessage, Empty, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    description = "Requires the admin role.",
    params(("product_id" = i64, Path, description = "Product id")),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
    ),
)]
pub async fn delete_product(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    state
        .service
        .delete_product(identity, DeleteProductInput { product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::message(
        "Product deleted successfully",
    )))
}
