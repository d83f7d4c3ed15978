use chrono::{TimeZone, Utc};

use crate::domain::product::entities::Product;
use crate::entity::{categories::Model as CategoryModel, products::Model as ProductModel};

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            sku: model.sku,
            description: model.description,
            purchase_price: model.purchase_price,
            sale_price: model.sale_price,
            stock: model.stock,
            featured_image: model.featured_image,
            status: model.status,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            category_name: None,
        }
    }
}

impl From<(ProductModel, Option<CategoryModel>)> for Product {
    fn from((model, category): (ProductModel, Option<CategoryModel>)) -> Self {
        let mut product = Product::from(model);
        product.category_name = category.map(|category| category.name);
        product
    }
}
