use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    category::value_objects::{CategoryPatch, CreateCategoryInput},
    common::{
        entities::app_errors::CoreError,
        replace_if_changed,
        text::{headline, sentence},
    },
    product::entities::Product,
};

pub const NAME_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Loaded only when the caller asks for the category's products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Category {
    /// Applies `patch` and reports whether any stored field changed. `updated_at` moves only
    /// on an effective change.
    pub fn apply(&mut self, patch: CategoryPatch) -> Result<bool, CoreError> {
        let mut changed = false;

        if let Some(name) = patch.name {
            changed |= replace_if_changed(&mut self.name, normalize_name(&name)?);
        }
        if let Some(description) = patch.description {
            changed |= replace_if_changed(
                &mut self.description,
                normalize_description(description.as_deref())?,
            );
        }
        if let Some(featured_image) = patch.featured_image {
            changed |= replace_if_changed(
                &mut self.featured_image,
                normalize_image(featured_image.as_deref()),
            );
        }
        if let Some(status) = patch.status {
            changed |= replace_if_changed(&mut self.status, status);
        }

        if changed {
            self.updated_at = Utc::now();
        }
        Ok(changed)
    }
}

/// Normalized values of a category that is about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub status: bool,
}

impl NewCategory {
    pub fn new(input: CreateCategoryInput) -> Result<Self, CoreError> {
        Ok(Self {
            name: normalize_name(&input.name)?,
            description: normalize_description(input.description.as_deref())?,
            featured_image: normalize_image(input.featured_image.as_deref()),
            status: input.status,
        })
    }
}

fn normalize_name(name: &str) -> Result<String, CoreError> {
    let name = headline(name);
    if name.is_empty() {
        return Err(CoreError::Validation("The name field is required.".to_string()));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "The name may not be greater than {NAME_MAX_CHARS} characters."
        )));
    }
    Ok(name)
}

pub(crate) fn normalize_description(
    description: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let description = description.and_then(sentence);
    if let Some(text) = &description
        && text.chars().count() > DESCRIPTION_MAX_CHARS
    {
        return Err(CoreError::Validation(format!(
            "The description may not be greater than {DESCRIPTION_MAX_CHARS} characters."
        )));
    }
    Ok(description)
}

pub(crate) fn normalize_image(image: Option<&str>) -> Option<String> {
    image
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        let now = Utc::now();
        Category {
            id: 1,
            name: "Phones".to_string(),
            description: Some("Mobile phones".to_string()),
            featured_image: None,
            status: true,
            created_at: now,
            updated_at: now,
            products: None,
        }
    }

    #[test]
    fn test_new_category_is_normalized() {
        let category = NewCategory::new(CreateCategoryInput {
            name: "home_appliances".to_string(),
            description: Some("  kitchen and laundry ".to_string()),
            featured_image: Some("   ".to_string()),
            status: false,
        })
        .unwrap();

        assert_eq!(category.name, "Home Appliances");
        assert_eq!(category.description.as_deref(), Some("Kitchen and laundry"));
        assert_eq!(category.featured_image, None);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = NewCategory::new(CreateCategoryInput {
            name: " _ ".to_string(),
            description: None,
            featured_image: None,
            status: true,
        })
        .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_apply_detects_no_change_after_normalization() {
        let mut category = category();
        let before = category.updated_at;

        let changed = category
            .apply(CategoryPatch {
                name: Some("phones".to_string()),
                description: Some(Some("mobile phones".to_string())),
                featured_image: None,
                status: Some(true),
            })
            .unwrap();

        assert!(!changed);
        assert_eq!(category.updated_at, before);
    }

    #[test]
    fn test_apply_clears_description() {
        let mut category = category();

        let changed = category
            .apply(CategoryPatch {
                description: Some(None),
                ..CategoryPatch::default()
            })
            .unwrap();

        assert!(changed);
        assert_eq!(category.description, None);
    }

    #[test]
    fn test_products_are_omitted_unless_loaded() {
        let json = serde_json::to_value(category()).unwrap();
        assert!(json.get("products").is_none());
    }
}
