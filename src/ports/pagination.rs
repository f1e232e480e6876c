//! Pagination types shared by the list endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering of a listing by creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Asc,
    Desc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Asc => "asc",
            SortBy::Desc => "desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page request. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: Option<SortBy>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
            sort_by: None,
        }
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// The request for the following page.
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    /// Query string pairs for `?size&page&sortby`.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("size", self.size.to_string()), ("page", self.page.to_string())];
        if let Some(sort_by) = self.sort_by {
            query.push(("sortby", sort_by.to_string()));
        }
        query
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(alias = "number_of_page", default)]
    pub page: u32,
    #[serde(alias = "size_of_page", default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Builds a page from a full list (used by the in-memory adapters).
    pub fn slice(items: &[T], request: &PageRequest) -> Self
    where
        T: Clone,
    {
        let size = request.size as usize;
        let start = (request.page as usize - 1).saturating_mul(size);
        let content = items.iter().skip(start).take(size).cloned().collect();
        let total_pages = items.len().div_ceil(size) as u32;

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements: items.len() as u64,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
