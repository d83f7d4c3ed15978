use axum::extract::{Path, State};
use catalog_core::domain::category::{ports::CategoryService, value_objects::GetCategoryInput};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        category::resources::CategoryResource,
        query_extractor::ListQueryExtractor,
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
    path = "/{category_id}",
    tag = "category",
    summary = "Get category",
    params(
        ("category_id" = i64, Path, description = "Category id"),
        ("include" = Option<String>, Query, description = "Embeds the category's products"),
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<CategoryResource>),
        (status = 404, description = "Category not found"),
    ),
)]
pub async fn get_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ApiMessage<CategoryResource>>, ApiError> {
    let category = state
        .service
        .get_category(
            identity,
            GetCategoryInput {
                category_id,
                include_products: query.include,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "Category retrieved successfully",
        CategoryResource::from(category),
    )))
}
