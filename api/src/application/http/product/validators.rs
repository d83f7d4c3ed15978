use catalog_core::domain::product::value_objects::{CreateProductInput, ProductPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::nullable::nullable;

/// Full product payload, used by `POST` and `PUT`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(range(min = 1, message = "The selected category id is invalid."))]
    pub category_id: i64,

    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "The description may not be greater than 500 characters."))]
    pub description: Option<String>,

    #[validate(range(min = 0.01, message = "The purchase price must be at least 0.01."))]
    pub purchase_price: f64,

    #[validate(range(min = 0.05, message = "The sale price must be at least 0.05."))]
    pub sale_price: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "The stock must be at least 0."))]
    pub stock: Option<i32>,

    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub status: bool,
}

impl From<CreateProductValidator> for CreateProductInput {
    fn from(payload: CreateProductValidator) -> Self {
        CreateProductInput {
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            purchase_price: payload.purchase_price,
            sale_price: payload.sale_price,
            stock: payload.stock,
            featured_image: payload.featured_image,
            status: payload.status,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(transparent)]
pub struct BulkCreateProductsValidator {
    #[validate(length(min = 1, message = "At least one product is required."), nested)]
    pub products: Vec<CreateProductValidator>,
}

/// Partial product payload, used by `PATCH`. `null` clears a nullable field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchProductValidator {
    #[serde(default)]
    #[validate(range(min = 1, message = "The selected category id is invalid."))]
    pub category_id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default)]
    #[validate(range(min = 0.01, message = "The purchase price must be at least 0.01."))]
    pub purchase_price: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.05, message = "The sale price must be at least 0.05."))]
    pub sale_price: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "The stock must be at least 0."))]
    pub stock: Option<i32>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,

    #[serde(default)]
    pub status: Option<bool>,
}

impl From<PatchProductValidator> for ProductPatch {
    fn from(payload: PatchProductValidator) -> Self {
        ProductPatch {
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            purchase_price: payload.purchase_price,
            sale_price: payload.sale_price,
            stock: payload.stock,
            featured_image: payload.featured_image,
            status: payload.status,
        }
    }
}
