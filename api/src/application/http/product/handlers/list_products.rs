use axum::extract::State;
use catalog_core::domain::product::{
    ports::ProductService,
    value_objects::{DEFAULT_PRODUCTS_PER_PAGE, ListProductsInput},
};
use utoipa::IntoParams;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        product::resources::ProductCollection,
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

/// Documented listing parameters. Filters use `field[operator]=value`, e.g. `price[gte]=10`.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct ListProductsParams {
    /// One-based page number.
    pub page: Option<u64>,
    /// Page size, 1 to 100.
    pub per_page: Option<u64>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List products",
    description = "Paginated products, newest first. Filterable by category_id[eq], name[eq|like], sku[eq|lt|lte|gt|gte], description[eq|like], purchase_price[eq|lt|lte|gt|gte], price[eq|lt|lte|gt|gte], stock[eq|lt|lte|gt|gte], featured_image[eq|like], status[eq|ne] and created_at[eq|lt|lte|gt|gte].",
    params(ListProductsParams),
    security(("bearer" = [])),
    responses(
        (status = 200, body = ApiMessage<ProductCollection>),
        (status = 400, description = "A filter value does not fit its column"),
        (status = 401, description = "Unauthorized"),
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<ApiMessage<ProductCollection>>, ApiError> {
    let page = query.page_request(DEFAULT_PRODUCTS_PER_PAGE);

    let products = state
        .service
        .list_products(
            identity,
            ListProductsInput {
                query: query.filters,
                page,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiMessage::new(
        "Products retrieved successfully",
        ProductCollection::from(products),
    )))
}
