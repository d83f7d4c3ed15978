use crate::domain::{common::entities::pagination::PageRequest, filter::entities::RawQuery};

pub const DEFAULT_PRODUCTS_PER_PAGE: u64 = 5;

#[derive(Debug, Clone)]
pub struct ListProductsInput {
    pub query: RawQuery,
    pub page: PageRequest,
}

pub struct GetProductInput {
    pub product_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductInput {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub stock: Option<i32>,
    pub featured_image: Option<String>,
    pub status: bool,
}

pub struct BulkCreateProductsInput {
    pub products: Vec<CreateProductInput>,
}

/// Partial update. `Some(None)` clears a nullable field; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock: Option<i32>,
    pub featured_image: Option<Option<String>>,
    pub status: Option<bool>,
}

impl From<CreateProductInput> for ProductPatch {
    fn from(input: CreateProductInput) -> Self {
        Self {
            category_id: Some(input.category_id),
            name: Some(input.name),
            description: Some(input.description),
            purchase_price: Some(input.purchase_price),
            sale_price: Some(input.sale_price),
            stock: Some(input.stock.unwrap_or(0)),
            featured_image: Some(input.featured_image),
            status: Some(input.status),
        }
    }
}

pub struct UpdateProductInput {
    pub product_id: i64,
    pub patch: ProductPatch,
}

pub struct DeleteProductInput {
    pub product_id: i64,
}
