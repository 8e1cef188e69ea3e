use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of an offset-paginated listing. A page past the end is simply
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> PageDto<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let per_page = request.per_page();
        let pages = u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);
        let page = request.page();
        Self {
            items,
            page,
            per_page,
            total,
            pages,
            has_prev: page > 1,
            has_next: page < pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageDto;
    use crate::domain::pagination::PageRequest;

    #[test]
    fn page_flags_follow_total() {
        let page = PageDto::new(vec![1, 2], PageRequest::articles(2), 11);
        assert_eq!(page.pages, 2);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let page: PageDto<i32> = PageDto::new(Vec::new(), PageRequest::articles(1), 0);
        assert_eq!(page.pages, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }
}
