use crate::domain::filter::{
    entities::{ComparisonSymbol, FilterOperator},
    spec::{FilterSpec, FilterSpecError},
};

/// Query parameters accepted when listing categories.
///
/// Parameter names match the category resource fields clients receive, so a client can filter on
/// any field it sees in a listing.
pub fn category_filter_spec() -> Result<FilterSpec, FilterSpecError> {
    use FilterOperator::*;

    FilterSpec::builder("categories")
        .parameter("category_name", [Eq, Like])
        .parameter("description_excerpt", [Eq, Like])
        .parameter("url_image", [Eq])
        .parameter("created_at", [Eq, Lt, Lte, Gt, Gte])
        .column("category_name", "name")
        .column("description_excerpt", "description")
        .column("url_image", "featured_image")
        .symbol(Eq, ComparisonSymbol::Equal)
        .symbol(Like, ComparisonSymbol::Like)
        .symbol(Lt, ComparisonSymbol::Less)
        .symbol(Lte, ComparisonSymbol::LessOrEqual)
        .symbol(Gt, ComparisonSymbol::Greater)
        .symbol(Gte, ComparisonSymbol::GreaterOrEqual)
        .build()
}
