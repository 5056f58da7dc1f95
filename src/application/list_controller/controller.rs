//! Paginated, filterable list controller.
//!
//! One controller owns the query and load state of one list view. Every
//! operation that changes the query bumps a generation counter before the
//! fetch is issued; a response is applied only if its generation is still the
//! latest, so a slow response can never overwrite the result of a newer query.
//!
//! State is published through a [`tokio::sync::watch`] channel so views can
//! re-render on change without polling.

use crate::domain::listing::{
    load_state::{ListState, LoadState},
    resource::{CollectionSource, Resource, ResourceQuery},
};
use crate::domain::shared::pagination::Filter;
use std::sync::Arc;
use tokio::sync::watch;

/// State snapshot type of a controller for resource `R`.
pub type ResourceState<R> = ListState<<R as Resource>::Item, <R as Resource>::Filter>;

/// How an issued fetch ended from the controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response became the current load state.
    Applied,
    /// A newer fetch was issued while this one was in flight; its response
    /// was dropped.
    Superseded,
}

pub struct ListController<R: Resource> {
    source: Arc<dyn CollectionSource<R>>,
    state: watch::Sender<ResourceState<R>>,
}

impl<R: Resource> ListController<R> {
    /// Starts on page 1 with no filter and nothing loaded.
    pub fn new(source: Arc<dyn CollectionSource<R>>) -> Self {
        Self::with_query(source, ResourceQuery::<R>::default())
    }

    pub fn with_query(source: Arc<dyn CollectionSource<R>>, query: ResourceQuery<R>) -> Self {
        let (state, _) = watch::channel(ListState::new(query));
        Self { source, state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ResourceState<R> {
        self.state.borrow().clone()
    }

    pub fn query(&self) -> ResourceQuery<R> {
        self.state.borrow().query.clone()
    }

    /// Receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<R>> {
        self.state.subscribe()
    }

    /// Replaces the filter, returns to page 1 and refetches.
    ///
    /// Refetches even when the filter is unchanged.
    pub async fn set_filter(&self, filter: Filter<R::Filter>) -> FetchOutcome {
        tracing::debug!(resource = R::PATH, filter = filter.label(), "filter changed");
        self.fetch_with(|query| query.set_filter(filter)).await
    }

    /// Replaces the search term, returns to page 1 and refetches.
    pub async fn set_search(&self, search: Option<String>) -> FetchOutcome {
        self.fetch_with(|query| query.set_search(search)).await
    }

    /// Moves to page `page` if the last successful load says it exists.
    ///
    /// Returns `None` without fetching when nothing has loaded yet or `page`
    /// is outside `1..=total_pages`. A failed load keeps the bounds of the
    /// last good page, so paging away from an error still works.
    pub async fn go_to_page(&self, page: u32) -> Option<FetchOutcome> {
        let in_range = self.state.borrow().can_visit(page);
        if !in_range {
            tracing::debug!(resource = R::PATH, page, "ignoring out-of-range page");
            return None;
        }
        Some(self.fetch_with(|query| query.set_page(page)).await)
    }

    pub async fn go_next(&self) -> Option<FetchOutcome> {
        let next = self.state.borrow().query.page().saturating_add(1);
        self.go_to_page(next).await
    }

    pub async fn go_previous(&self) -> Option<FetchOutcome> {
        let previous = self.state.borrow().query.page().saturating_sub(1);
        self.go_to_page(previous).await
    }

    /// Refetches the current query, e.g. after an enrollment.
    pub async fn reload(&self) -> FetchOutcome {
        self.fetch_with(|_| {}).await
    }

    async fn fetch_with<E>(&self, edit: E) -> FetchOutcome
    where
        E: FnOnce(&mut ResourceQuery<R>),
    {
        let mut generation = 0;
        let mut query = ResourceQuery::<R>::default();
        self.state.send_modify(|state| {
            edit(&mut state.query);
            state.generation += 1;
            state.load = std::mem::take(&mut state.load).begin_loading();
            generation = state.generation;
            query = state.query.clone();
        });

        tracing::debug!(
            resource = R::PATH,
            generation,
            page = query.page(),
            filter = query.filter().label(),
            search = query.search().unwrap_or(""),
            "fetching page"
        );
        let result = self.source.fetch_page(&query).await;

        let applied = self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.settle(result);
            match &state.load {
                LoadState::Failed(err) => tracing::warn!(
                    resource = R::PATH,
                    generation,
                    kind = ?err.kind,
                    message = %err.message,
                    "list load failed"
                ),
                LoadState::Loaded(page) => tracing::debug!(
                    resource = R::PATH,
                    generation,
                    items = page.items.len(),
                    total = page.total_count,
                    "list loaded"
                ),
                LoadState::Idle | LoadState::Loading { .. } => {}
            }
            true
        });

        if applied {
            FetchOutcome::Applied
        } else {
            tracing::debug!(resource = R::PATH, generation, "discarding superseded response");
            FetchOutcome::Superseded
        }
    }
}
