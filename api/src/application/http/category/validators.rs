use catalog_core::domain::category::value_objects::{CategoryPatch, CreateCategoryInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::nullable::nullable;

/// Full category payload, used by `POST` and `PUT`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryValidator {
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "The description may not be greater than 500 characters."))]
    pub description: Option<String>,

    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub status: bool,
}

impl From<CreateCategoryValidator> for CreateCategoryInput {
    fn from(payload: CreateCategoryValidator) -> Self {
        CreateCategoryInput {
            name: payload.name,
            description: payload.description,
            featured_image: payload.featured_image,
            status: payload.status,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(transparent)]
pub struct BulkCreateCategoriesValidator {
    #[validate(length(min = 1, message = "At least one category is required."), nested)]
    pub categories: Vec<CreateCategoryValidator>,
}

/// Partial category payload, used by `PATCH`. `null` clears a nullable field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchCategoryValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,

    #[serde(default)]
    pub status: Option<bool>,
}

impl From<PatchCategoryValidator> for CategoryPatch {
    fn from(payload: PatchCategoryValidator) -> Self {
        CategoryPatch {
            name: payload.name,
            description: payload.description,
            featured_image: payload.featured_image,
            status: payload.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_long_description_is_rejected() {
        let payload: CreateCategoryValidator = serde_json::from_value(json!({
            "name": "Phones",
            "description": "d".repeat(501)
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_status_defaults_to_inactive() {
        let payload: CreateCategoryValidator =
            serde_json::from_value(json!({"name": "Phones"})).unwrap();

        assert!(payload.validate().is_ok());
        assert!(!CreateCategoryInput::from(payload).status);
    }

    #[test]
    fn test_empty_bulk_is_rejected() {
        let payload: BulkCreateCategoriesValidator = serde_json::from_value(json!([])).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_patch_null_clears_description() {
        let payload: PatchCategoryValidator =
            serde_json::from_value(json!({"description": null, "status": true})).unwrap();

        let patch = CategoryPatch::from(payload);
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.featured_image, None);
        assert_eq!(patch.status, Some(true));
    }
}
