use catalog_core::domain::{common::entities::pagination::PageRequest, filter::entities::RawQuery};

const PAGE_KEY: &str = "page";
const PER_PAGE_KEY: &str = "per_page";
const INCLUDE_KEY: &str = "include";

/// Decoded query string of a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: RawQuery,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub include: bool,
}

impl ListQuery {
    /// Builds the query from decoded `key=value` pairs, in request order.
    ///
    /// Handles formats like:
    /// - `name=value` (kept as a scalar, which filters ignore)
    /// - `name[operator]=value`
    /// - `page=2`, `per_page=50`, `include=1`
    ///
    /// Keys nested deeper than one bracket pair, or with an empty operator, are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = ListQuery::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.into();

            match key {
                PAGE_KEY => query.page = value.trim().parse().ok(),
                PER_PAGE_KEY => query.per_page = value.trim().parse().ok(),
                INCLUDE_KEY => query.include = !matches!(value.trim(), "0" | "false"),
                _ => match split_bracket_key(key) {
                    Some((field, Some(operator))) => {
                        query.filters.insert_operator(field, operator, value)
                    }
                    Some((field, None)) => query.filters.insert_scalar(field, value),
                    None => {}
                },
            }
        }

        query
    }

    pub fn page_request(&self, default_per_page: u64) -> PageRequest {
        PageRequest::new(self.page, self.per_page, default_per_page)
    }
}

/// `field` -> `(field, None)`, `field[op]` -> `(field, Some(op))`, anything else -> `None`.
fn split_bracket_key(key: &str) -> Option<(&str, Option<&str>)> {
    let Some(open) = key.find('[') else {
        return (!key.is_empty() && !key.contains(']')).then_some((key, None));
    };

    let field = &key[..open];
    let operator = key[open + 1..].strip_suffix(']')?;

    if field.is_empty() || operator.is_empty() || operator.contains(['[', ']']) {
        return None;
    }

    Some((field, Some(operator)))
}
