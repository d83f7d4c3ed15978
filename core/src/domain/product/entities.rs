use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    category::entities::{NAME_MAX_CHARS, normalize_description, normalize_image},
    common::{
        entities::app_errors::CoreError, generate_random_string, money, replace_if_changed,
        text::headline,
    },
    product::value_objects::{CreateProductInput, ProductPatch},
};

pub const SKU_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub stock: i32,
    pub featured_image: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Name of the owning category, filled in by reads.
    pub category_name: Option<String>,
}

impl Product {
    /// Applies `patch` and reports whether any stored field changed. Prices are validated
    /// against each other after the patch, so a lone `sale_price` is checked against the stored
    /// purchase price.
    pub fn apply(&mut self, patch: ProductPatch) -> Result<bool, CoreError> {
        let mut changed = false;

        if let Some(category_id) = patch.category_id {
            changed |= replace_if_changed(&mut self.category_id, category_id);
        }
        if let Some(name) = patch.name {
            changed |= replace_if_changed(&mut self.name, normalize_name(&name)?);
        }
        if let Some(description) = patch.description {
            changed |= replace_if_changed(
                &mut self.description,
                normalize_description(description.as_deref())?,
            );
        }
        if let Some(purchase_price) = patch.purchase_price {
            changed |= replace_if_changed(&mut self.purchase_price, money(purchase_price)?);
        }
        if let Some(sale_price) = patch.sale_price {
            changed |= replace_if_changed(&mut self.sale_price, money(sale_price)?);
        }
        if let Some(stock) = patch.stock {
            changed |= replace_if_changed(&mut self.stock, validate_stock(stock)?);
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

        validate_prices(self.purchase_price, self.sale_price)?;

        if changed {
            self.updated_at = Utc::now();
        }
        Ok(changed)
    }
}

/// Normalized values of a product that is about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub stock: i32,
    pub featured_image: Option<String>,
    pub status: bool,
}

impl NewProduct {
    pub fn new(input: CreateProductInput) -> Result<Self, CoreError> {
        let purchase_price = money(input.purchase_price)?;
        let sale_price = money(input.sale_price)?;
        validate_prices(purchase_price, sale_price)?;

        Ok(Self {
            category_id: input.category_id,
            name: normalize_name(&input.name)?,
            sku: generate_sku(),
            description: normalize_description(input.description.as_deref())?,
            purchase_price,
            sale_price,
            stock: validate_stock(input.stock.unwrap_or(0))?,
            featured_image: normalize_image(input.featured_image.as_deref()),
            status: input.status,
        })
    }
}

pub fn generate_sku() -> String {
    generate_random_string(SKU_LENGTH).to_uppercase()
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

fn validate_stock(stock: i32) -> Result<i32, CoreError> {
    if stock < 0 {
        return Err(CoreError::Validation(
            "The stock must be at least 0.".to_string(),
        ));
    }
    Ok(stock)
}

fn validate_prices(purchase_price: Decimal, sale_price: Decimal) -> Result<(), CoreError> {
    if purchase_price < Decimal::new(1, 2) {
        return Err(CoreError::Validation(
            "The purchase price must be at least 0.01.".to_string(),
        ));
    }
    if sale_price < Decimal::new(5, 2) {
        return Err(CoreError::Validation(
            "The sale price must be at least 0.05.".to_string(),
        ));
    }
    if sale_price < purchase_price {
        return Err(CoreError::Validation(
            "The sale price must be greater than or equal to the purchase price.".to_string(),
        ));
    }
    Ok(())
}
