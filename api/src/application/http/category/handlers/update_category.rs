use axum::extract::{Path, State};
use catalog_core::domain::{
    authentication::value_objects::Identity,
    category::{
        ports::CategoryService,
        value_objects::{CategoryPatch, CreateCategoryInput, UpdateCategoryInput},
    },
    common::entities::UpdateOutcome,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        category::validators::{CreateCategoryValidator, PatchCategoryValidator},
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
    category_id: i64,
    patch: CategoryPatch,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    let outcome = state
        .service
        .update_category(identity, UpdateCategoryInput { category_id, patch })
        .await
        .map_err(ApiError::from)?;

    let message = match outcome {
        UpdateOutcome::Unchanged => "No changes detected!!",
        UpdateOutcome::Updated(_) => "Category updated successfully!!",
    };

    Ok(Response::OK(ApiMessage::message(message)))
}

#[utoipa::path(
    put,
    path = "/{category_id}",
    tag = "category",
    summary = "Replace category",
    description = "Replaces every editable field. Requires the admin role.",
    params(("category_id" = i64, Path, description = "Category id")),
    security(("bearer" = [])),
    request_body = CreateCategoryValidator,
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn replace_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCategoryValidator>,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    let patch = CategoryPatch::from(CreateCategoryInput::from(payload));
    apply_patch(&state, identity, category_id, patch).await
}

#[utoipa::path(
    patch,
    path = "/{category_id}",
    tag = "category",
    summary = "Update category",
    description = "Updates the fields present in the body. Requires the admin role.",
    params(("category_id" = i64, Path, description = "Category id")),
    security(("bearer" = [])),
    request_body = PatchCategoryValidator,
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn update_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<PatchCategoryValidator>,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    apply_patch(&state, identity, category_id, payload.into()).await
}
