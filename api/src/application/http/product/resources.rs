use catalog_core::domain::{
    common::entities::pagination::{Page, PageMeta},
    product::entities::Product,
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductImages {
    pub featured_image: Option<String>,
}

/// Client-facing shape of a product. Field names match the filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductResource {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category: Option<String>,
    pub sku: String,
    pub description: Option<String>,
    /// Sale price.
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub product_images: ProductImages,
}

impl From<Product> for ProductResource {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category_id: product.category_id,
            category: product.category_name,
            sku: product.sku,
            description: product.description,
            price: product.sale_price.to_f64().unwrap_or_default(),
            stock: product.stock,
            created_at: product.created_at,
            product_images: ProductImages {
                featured_image: product.featured_image,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductCollection {
    pub data: Vec<ProductResource>,
    pub meta: PageMeta,
}

impl From<Page<Product>> for ProductCollection {
    fn from(page: Page<Product>) -> Self {
        let meta = page.meta();
        Self {
            data: page.items.into_iter().map(ProductResource::from).collect(),
            meta,
        }
    }
}
