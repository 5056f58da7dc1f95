use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Number of items the backend returns per page.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// A value that can narrow a collection request to a subset of its items.
///
/// Each filterable resource has one query parameter (`level`, `status`, ...)
/// and a fixed set of values it accepts.
pub trait FilterValue: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Query parameter name the backend expects.
    const PARAM: &'static str;

    /// Wire value for this filter option.
    fn as_param(&self) -> &'static str;
}

/// Active filter of a list: everything, or a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<F> {
    All,
    Only(F),
}

impl<F> Default for Filter<F> {
    fn default() -> Self {
        Self::All
    }
}

impl<F: FilterValue> Filter<F> {
    /// Query pair to send, `None` when no filter is applied.
    pub fn as_query_pair(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::All => None,
            Self::Only(value) => Some((F::PARAM, value.as_param())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(value) => value.as_param(),
        }
    }
}

/// Page, filter and search term that fully determine one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery<F> {
    page: u32,
    filter: Filter<F>,
    search: Option<String>,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page: 1,
            filter: Filter::All,
            search: None,
        }
    }
}

impl<F> ListQuery<F> {
    pub fn new(page: u32, filter: Filter<F>, search: Option<String>) -> Self {
        Self {
            page: page.max(1),
            filter,
            search: normalize_search(search),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn filter(&self) -> &Filter<F> {
        &self.filter
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Moves to `page`, clamped so the page number never drops below 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Replaces the filter and returns to the first page.
    pub fn set_filter(&mut self, filter: Filter<F>) {
        self.filter = filter;
        self.page = 1;
    }

    /// Replaces the search term and returns to the first page.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = normalize_search(search);
        self.page = 1;
    }
}

fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
}

/// One page of a collection plus the metadata needed to navigate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub page_size: u32,
}

impl<T> PageResult<T> {
    /// `ceil(total_count / page_size)`; an empty collection has no pages.
    pub fn total_pages(&self) -> u32 {
        self.bounds().total_pages()
    }

    /// Whether `page` can be requested from the collection this page belongs to.
    pub fn contains_page(&self, page: u32) -> bool {
        self.bounds().contains_page(page)
    }

    pub fn bounds(&self) -> PageBounds {
        PageBounds {
            total_count: self.total_count,
            page_size: self.page_size,
        }
    }
}

/// Size of a collection as reported by its last successful page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBounds {
    pub total_count: u64,
    pub page_size: u32,
}

impl PageBounds {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages()
    }
}

pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
