use crate::domain::{common::entities::pagination::PageRequest, filter::entities::RawQuery};

pub const DEFAULT_CATEGORIES_PER_PAGE: u64 = 15;

#[derive(Debug, Clone)]
pub struct ListCategoriesInput {
    pub query: RawQuery,
    pub include_products: bool,
    pub page: PageRequest,
}

pub struct GetCategoryInput {
    pub category_id: i64,
    pub include_products: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub status: bool,
}

pub struct BulkCreateCategoriesInput {
    pub categories: Vec<CreateCategoryInput>,
}

/// Partial update. `Some(None)` clears a nullable field; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub featured_image: Option<Option<String>>,
    pub status: Option<bool>,
}

impl From<CreateCategoryInput> for CategoryPatch {
    fn from(input: CreateCategoryInput) -> Self {
        Self {
            name: Some(input.name),
            description: Some(input.description),
            featured_image: Some(input.featured_image),
            status: Some(input.status),
        }
    }
}

pub struct UpdateCategoryInput {
    pub category_id: i64,
    pub patch: CategoryPatch,
}

pub struct DeleteCategoryInput {
    pub category_id: i64,
}
