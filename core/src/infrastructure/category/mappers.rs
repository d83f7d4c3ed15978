use chrono::{TimeZone, Utc};

use crate::domain::category::entities::Category;
use crate::entity::categories::Model as CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            featured_image: model.featured_image,
            status: model.status,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            products: None,
        }
    }
}
