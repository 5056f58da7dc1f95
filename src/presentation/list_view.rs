use crate::domain::listing::load_state::{ListState, LoadState};
use crate::domain::shared::pagination::FilterValue;
use serde::Serialize;

/// Everything a paginated list page needs to render.
///
/// Pager buttons are disabled at the collection boundaries and while a fetch
/// is in flight, so the view never issues a request the controller would
/// ignore or immediately supersede.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListViewModel<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub active_filter: &'static str,
    pub search: Option<String>,
    pub is_loading: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub error: Option<String>,
    pub needs_reauthentication: bool,
}

impl<T: Clone> ListViewModel<T> {
    pub fn from_state<F: FilterValue>(state: &ListState<T, F>) -> Self {
        let page = state.query.page();
        let is_loading = state.load.is_loading();
        let (total_pages, total_count) = state
            .bounds
            .map(|bounds| (bounds.total_pages(), bounds.total_count))
            .unwrap_or((0, 0));
        let error = state.load.error();

        Self {
            items: state.load.items().to_vec(),
            page,
            total_pages,
            total_count,
            active_filter: state.query.filter().label(),
            search: state.query.search().map(str::to_string),
            is_loading,
            can_go_previous: !is_loading && page > 1 && total_pages > 0,
            can_go_next: !is_loading && page < total_pages,
            error: error.map(|e| e.message.clone()),
            needs_reauthentication: error.is_some_and(|e| e.needs_reauthentication()),
        }
    }

    /// Nothing to show and nothing pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.is_loading && self.error.is_none()
    }
}

/// Short status line for the list footer, e.g. "Page 2 of 3 (16 courses)".
pub fn status_line<T>(load: &LoadState<T>, page: u32, noun: &str) -> String {
    match load {
        LoadState::Idle => String::new(),
        LoadState::Loading { previous: None } => "Loading...".to_string(),
        LoadState::Failed(err) => err.message.clone(),
        LoadState::Loading {
            previous: Some(loaded),
        }
        | LoadState::Loaded(loaded) => format!(
            "Page {} of {} ({} {})",
            page,
            loaded.total_pages().max(1),
            loaded.total_count,
            noun
        ),
    }
}
