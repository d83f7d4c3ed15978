use axum::extract::{Path, State};
use catalog_core::domain::{
    authentication::value_objects::Identity,
    common::entities::UpdateOutcome,
    product::{
        ports::ProductService,
        value_objects::{CreateProductInput, ProductPatch, UpdateProductInput},
    },
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        product::validators::{CreateProductValidator, PatchProductValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::{ApiMessage, Empty, Response},
            },
            app_state::AppState,
        },
    },
};

async fn apply_patch(
    state: &AppState,
    identity: Identity,
    product_id: i64,
    patch: ProductPatch,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    let outcome = state
        .service
        .update_product(identity, UpdateProductInput { product_id, patch })
        .await
        .map_err(ApiError::from)?;

    let message = match outcome {
        UpdateOutcome::Unchanged => "No changes detected!!",
        UpdateOutcome::Updated(_) => "Product updated successfully!!",
    };

    Ok(Response::OK(ApiMessage::message(message)))
}

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Replace product",
    description = "Replaces every editable field. Requires the admin role.",
    params(("product_id" = i64, Path, description = "Product id")),
    security(("bearer" = [])),
    request_body = CreateProductValidator,
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn replace_product(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    let patch = ProductPatch::from(CreateProductInput::from(payload));
    apply_patch(&state, identity, product_id, patch).await
}

#[utoipa::path(
    patch,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    description = "Updates the fields present in the body. Requires the admin role.",
    params(("product_id" = i64, Path, description = "Product id")),
    security(("bearer" = [])),
    request_body = PatchProductValidator,
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn update_product(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<PatchProductValidator>,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    apply_patch(&state, identity, product_id, payload.into()).await
}
