use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_PER_PAGE: u64 = 100;
const MAX_OFFSET: u64 = i64::MAX as u64;

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Normalizes client input: pages start at 1, `per_page` is kept within `1..=100` and the
    /// page is capped so its offset fits a Postgres `BIGINT`.
    pub fn new(page: Option<u64>, per_page: Option<u64>, default_per_page: u64) -> Self {
        let per_page = per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE);
        let last_addressable = MAX_OFFSET / per_page + 1;

        Self {
            page: page.unwrap_or(1).clamp(1, last_addressable),
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            current_page: self.page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.total.div_ceil(self.per_page).max(1),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_normalization() {
        assert_eq!(
            PageRequest::new(None, None, 15),
            PageRequest {
                page: 1,
                per_page: 15
            }
        );
        assert_eq!(PageRequest::new(Some(0), Some(0), 15).per_page, 1);
        assert_eq!(PageRequest::new(Some(0), Some(0), 15).page, 1);
        assert_eq!(PageRequest::new(Some(3), Some(500), 5).per_page, 100);
        assert_eq!(PageRequest::new(Some(3), Some(10), 5).offset(), 20);
    }

    #[test]
    fn test_oversized_page_keeps_offset_in_range() {
        let request = PageRequest::new(Some(200_000_000_000_000_000), Some(100), 15);

        let offset = (request.page - 1).checked_mul(request.per_page);
        assert!(offset.is_some_and(|offset| offset <= i64::MAX as u64));
        assert_eq!(request.offset(), offset.unwrap());

        let request = PageRequest::new(Some(u64::MAX), Some(1), 15);
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_last_page() {
        let request = PageRequest::new(Some(1), Some(5), 5);
        assert_eq!(Page::<()>::new(vec![], request, 0).meta().last_page, 1);
        assert_eq!(Page::<()>::new(vec![], request, 5).meta().last_page, 1);
        assert_eq!(Page::<()>::new(vec![], request, 11).meta().last_page, 3);
    }
}
