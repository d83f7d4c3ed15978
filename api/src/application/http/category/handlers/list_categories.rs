use axum::extract::State;
use catalog_core::domain::category::{
    ports::CategoryService,
    value_objects::{DEFAULT_CATEGORIES_PER_PAGE, ListCategoriesInput},
};
use utoipa::IntoParams;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        category::resources::CategoryCollection,
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

/// Documented listing parameters. Filters use `field[operator]=value`, e.g.
/// `category_name[like]=phone`.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct ListCategoriesParams {
    /// One-based page number.
    pub page: Option<u64>,
    /// Page size, 1 to 100.
    pub per_page: Option<u64>,
    /// Embeds each category's products when present and not `0`/`false`.
    pub include: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "category",
    summary = "List categories",
    description = "Paginated categories, newest first. Filterable by category_name[eq|like], description_excerpt[eq|like], url_image[eq] and created_at[eq|lt|lte|gt|gte].",
    params(ListCategoriesParams),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<CategoryCollection>),
        (status = 400, description = "A filter value does not fit its column"),
        (status = 401, description = "Unauthorized"),
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ApiMessage<CategoryCollection>>, ApiError> {
    let page = query.page_request(DEFAULT_CATEGORIES_PER_PAGE);

    let categories = state
        .service
        .list_categories(
            identity,
            ListCategoriesInput {
                query: query.filters,
                include_products: query.include,
                page,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "Categories retrieved successfully",
        CategoryCollection::from(categories),
    )))
}
