/// Shared request parameters
///
/// List endpoints take `?page_id=N&page_size=M` with `page_id >= 1` and
/// `page_size` in `5..=10`. Item endpoints take a positive `:id`.

use serde::Deserialize;
use shopping_shared::store::Page;
use validator::Validate;

/// Pagination query
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ListQuery {
    /// 1-based page number
    #[validate(range(min = 1, message = "page_id must be at least 1"))]
    pub page_id: i32,

    /// Rows per page
    #[validate(range(min = 5, max = 10, message = "page_size must be between 5 and 10"))]
    pub page_size: i32,
}

impl ListQuery {
    /// Converts to a store page window
    pub fn page(&self) -> Page {
        Page::from_page_number(self.page_id, self.page_size)
    }
}

/// Numeric resource id from the path
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct IdPath {
    /// Row id
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_bounds() {
        let ok = ListQuery {
            page_id: 1,
            page_size: 5,
        };
        assert!(ok.validate().is_ok());

        let ok = ListQuery {
            page_id: 3,
            page_size: 10,
        };
        assert!(ok.validate().is_ok());

        for (page_id, page_size) in [(0, 5), (-1, 5), (1, 4), (1, 11)] {
            let query = ListQuery { page_id, page_size };
            assert!(query.validate().is_err(), "{page_id}/{page_size} should fail");
        }
    }

    #[test]
    fn test_list_query_page() {
        let query = ListQuery {
            page_id: 3,
            page_size: 5,
        };
        let page = query.page();
        assert_eq!(page.limit, 5);
        assert_eq!(page.offset, 10);
    }

    #[test]
    fn test_id_path_must_be_positive() {
        assert!(IdPath { id: 1 }.validate().is_ok());
        assert!(IdPath { id: 0 }.validate().is_err());
    }
}
