use catalog_core::domain::{
    category::entities::Category,
    common::{
        entities::pagination::{Page, PageMeta},
        text::excerpt,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::product::resources::ProductResource;

const DESCRIPTION_EXCERPT_CHARS: usize = 50;

/// Client-facing shape of a category. Field names match the filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryResource {
    pub id: i64,
    pub category_name: String,
    pub description_excerpt: Option<String>,
    /// Creation day as `dd/mm/YYYY`.
    pub created_at: String,
    pub url_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductResource>>,
}

impl From<Category> for CategoryResource {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            category_name: category.name,
            description_excerpt: category
                .description
                .as_deref()
                .map(|description| excerpt(description, DESCRIPTION_EXCERPT_CHARS)),
            created_at: category.created_at.format("%d/%m/%Y").to_string(),
            url_image: category.featured_image,
            products: category
                .products
                .map(|products| products.into_iter().map(ProductResource::from).collect()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryCollection {
    pub data: Vec<CategoryResource>,
    pub meta: PageMeta,
}

impl From<Page<Category>> for CategoryCollection {
    fn from(page: Page<Category>) -> Self {
        let meta = page.meta();
        Self {
            data: page.items.into_iter().map(CategoryResource::from).collect(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn category() -> Category {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 18, 45, 0).unwrap();
        Category {
            id: 2,
            name: "Phones".to_string(),
            description: Some("x".repeat(80)),
            featured_image: Some("storage/categories/phones.png".to_string()),
            status: true,
            created_at,
            updated_at: created_at,
            products: None,
        }
    }

    #[test]
    fn test_category_resource_shape() {
        let value = serde_json::to_value(CategoryResource::from(category())).unwrap();

        assert_eq!(value["category_name"], "Phones");
        assert_eq!(value["created_at"], "09/03/2024");
        assert_eq!(value["url_image"], "storage/categories/phones.png");
        assert_eq!(
            value["description_excerpt"].as_str().map(|s| s.chars().count()),
            Some(50)
        );
        assert!(value.get("products").is_none());
    }

    #[test]
    fn test_products_are_shaped_when_loaded() {
        let mut category = category();
        category.products = Some(vec![]);

        let value = serde_json::to_value(CategoryResource::from(category)).unwrap();
        assert_eq!(value["products"], serde_json::json!([]));
    }
}
