use crate::domain::filter::{
    entities::{ComparisonSymbol, FilterOperator},
    spec::{FilterSpec, FilterSpecError},
};

/// Query parameters accepted when listing products.
pub fn product_filter_spec() -> Result<FilterSpec, FilterSpecError> {
    use FilterOperator::*;

    let range = [Eq, Lt, Lte, Gt, Gte];

    FilterSpec::builder("products")
        .parameter("category_id", [Eq])
        .parameter("name", [Eq, Like])
        .parameter("sku", range)
        .parameter("description", [Eq, Like])
        .parameter("purchase_price", range)
        .parameter("price", range)
        .parameter("stock", range)
        .parameter("featured_image", [Eq, Like])
        .parameter("status", [Eq, Ne])
        .parameter("created_at", range)
        .column("price", "sale_price")
        .symbol(Eq, ComparisonSymbol::Equal)
        .symbol(Ne, ComparisonSymbol::NotEqual)
        .symbol(Like, ComparisonSymbol::Like)
        .symbol(Lt, ComparisonSymbol::Less)
        .symbol(Lte, ComparisonSymbol::LessOrEqual)
        .symbol(Gt, ComparisonSymbol::Greater)
        .symbol(Gte, ComparisonSymbol::GreaterOrEqual)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_spec_builds() {
        let spec = product_filter_spec().unwrap();

        assert_eq!(spec.allowed_parameters().count(), 10);
        assert_eq!(spec.column_for("price"), "sale_price");
        assert_eq!(spec.column_for("purchase_price"), "purchase_price");
        assert_eq!(
            spec.symbol_for(FilterOperator::Ne),
            Some(ComparisonSymbol::NotEqual)
        );
    }
}
