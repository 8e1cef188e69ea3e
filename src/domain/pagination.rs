// src/domain/pagination.rs

/// Page coordinates for offset-paginated listings. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Number of articles per page on the public journal and category listings.
    pub const ARTICLES_PER_PAGE: u32 = 9;

    /// Out-of-range values are clamped: page 0 is page 1, and a page always
    /// holds at least one item.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn articles(page: u32) -> Self {
        Self::new(page, Self::ARTICLES_PER_PAGE)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}
