use serde::{Deserialize, Serialize};

/// Paginated slice envelope returned by roster and ledger queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current 1-indexed page.
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    /// Wrap one page of items. A `page_size` below 1 is clamped to 1.
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = (total + page_size - 1) / page_size;
        let has_next = page < total_pages;
        let has_prev = page > 1;

        Self {
            data: items,
            meta: PaginationMeta {
                page,
                page_size,
                total,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }
}

/// Normalize pagination params with safe defaults.
pub fn normalize_pagination(page: Option<i64>, page_size: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(10).clamp(1, 100);
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_for_middle_page() {
        let resp = PaginatedResponse::new(vec![0; 10], 2, 10, 25);
        assert_eq!(resp.meta.total_pages, 3);
        assert!(resp.meta.has_next);
        assert!(resp.meta.has_prev);
    }

    #[test]
    fn meta_for_single_page() {
        let resp = PaginatedResponse::new(vec![0; 4], 1, 10, 4);
        assert_eq!(resp.meta.total_pages, 1);
        assert!(!resp.meta.has_next);
        assert!(!resp.meta.has_prev);
    }

    #[test]
    fn meta_for_exact_multiple() {
        let resp = PaginatedResponse::new(vec![0; 10], 2, 10, 20);
        assert_eq!(resp.meta.total_pages, 2);
        assert!(!resp.meta.has_next);
        assert!(resp.meta.has_prev);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let resp = PaginatedResponse::<i64>::new(vec![], 1, 0, 5);
        assert_eq!(resp.meta.page_size, 1);
        assert_eq!(resp.meta.total_pages, 5);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let resp = PaginatedResponse::<i64>::new(vec![], 1, 10, 0);
        assert_eq!(resp.meta.total_pages, 0);
        assert!(!resp.meta.has_next);
    }

    #[test]
    fn normalize_defaults_and_clamps() {
        assert_eq!(normalize_pagination(None, None), (1, 10));
        assert_eq!(normalize_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_pagination(Some(-3), Some(500)), (1, 100));
        assert_eq!(normalize_pagination(Some(4), Some(25)), (4, 25));
    }
}
