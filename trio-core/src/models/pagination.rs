//! Pagination of ordered result sets

use serde::Deserialize;

use super::lenient::IntOrText;

/// Items per page for every paginated listing
pub const PAGE_SIZE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to minimum of 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Page `page` with the standard page size.
    pub fn page(page: u32) -> Self {
        Self::new(page, PAGE_SIZE)
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::page(1)
    }
}

/// Query parameters for pagination (`?page=N`)
///
/// The page is parsed leniently: a missing, negative or non-numeric value
/// falls back to the first page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<IntOrText>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .as_ref()
            .and_then(IntOrText::to_int_lossy)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1);
        Self::page(page)
    }
}

/// Slice `items` down to one page.
///
/// Pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: Pagination) -> &[T] {
    let len = items.len() as u64;
    let start = page.offset().min(len) as usize;
    let end = (page.offset() + page.limit() as u64).min(len) as usize;
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::page(1).offset(), 0);
        assert_eq!(Pagination::page(2).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0, 10).page, 1);
        assert_eq!(Pagination::new(1, 0).per_page, 1);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, Pagination::page(1)), &items[0..10]);
        assert_eq!(paginate(&items, Pagination::page(3)), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn past_the_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, Pagination::page(4)).is_empty());
        assert!(paginate(&items, Pagination::page(u32::MAX)).is_empty());
        assert!(paginate::<u32>(&[], Pagination::page(1)).is_empty());
    }

    #[test]
    fn params_fall_back_to_first_page() {
        let cases = [
            (None, 1),
            (Some(IntOrText::Int(2)), 2),
            (Some(IntOrText::Text("3".into())), 3),
            (Some(IntOrText::Text("abc".into())), 1),
            (Some(IntOrText::Int(-4)), 1),
            (Some(IntOrText::Int(0)), 1),
        ];
        for (page, expected) in cases {
            let p = Pagination::from(PageParams { page });
            assert_eq!(p.page, expected);
            assert_eq!(p.per_page, PAGE_SIZE);
        }
    }
}
