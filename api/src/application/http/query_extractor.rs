use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use tracing::debug;

use super::query_params::ListQuery;

/// Extractor for listing queries: bracket-notation filters, pagination and `include`.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListQueryExtractor(query): ListQueryExtractor,
/// ) -> Result<Response, ApiError> {
///     // Use query.filters, query.page_request(..), query.include
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .unwrap_or_else(|e| {
                debug!("ignoring undecodable query string: {}", e);
                Vec::new()
            });

        Ok(ListQueryExtractor(ListQuery::from_pairs(pairs)))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;
    use catalog_core::domain::filter::entities::QueryValue;

    use super::*;

    #[tokio::test]
    async fn test_percent_encoded_brackets_are_decoded() {
        let request = Request::builder()
            .uri("/categories?category_name%5Blike%5D=phone%20case&page=2")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let ListQueryExtractor(query) = ListQueryExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        let Some(QueryValue::Operators(operators)) = query.filters.get("category_name") else {
            panic!("expected operator map");
        };
        assert_eq!(operators.get("like").map(String::as_str), Some("phone case"));
        assert_eq!(query.page, Some(2));
    }
}
