use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One page of a paginated collection, in the backend's wire shape.
///
/// Pages built locally via [`Page::from_slice`] keep every derived field
/// consistent. Merged pages may carry more content than `size` — the
/// merge appends and bumps `total_elements` without repaginating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Paginate a fully materialized collection: slice out
    /// `[page*size, page*size + size)` and synthesize the derived fields.
    pub fn from_slice(items: Vec<T>, page: usize, size: usize) -> Self {
        let total = items.len();
        let start = page.saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        let content: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect();

        Self {
            number_of_elements: content.len(),
            first: page == 0,
            last: page.saturating_mul(size).saturating_add(size) >= total,
            empty: content.is_empty(),
            total_elements: total,
            total_pages: total_pages(total, size),
            number: page,
            size,
            content,
        }
    }

    pub fn empty(page: usize, size: usize) -> Self {
        Self::from_slice(Vec::new(), page, size)
    }
}

/// `ceil(total / size)`, with a zero page size yielding zero pages.
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 { 0 } else { total.div_ceil(size) }
}
