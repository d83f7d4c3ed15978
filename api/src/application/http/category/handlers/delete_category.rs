use axum::extract::{Path, State};
use catalog_core::domain::category::{ports::CategoryService, value_objects::DeleteCategoryInput};

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
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    description = "Requires the admin role. A category that still has products cannot be deleted.",
    params(("category_id" = i64, Path, description = "Category id")),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<Empty>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "The category still has products"),
    ),
)]
pub async fn delete_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApiMessage<Empty>>, ApiError> {
    state
        .service
        .delete_category(identity, DeleteCategoryInput { category_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::message(
        "Category deleted successfully",
    )))
}
