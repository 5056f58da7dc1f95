use crate::domain::shared::{
    errors::ApiError,
    pagination::{FilterValue, ListQuery, PageResult},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A paginated collection exposed by the backend.
///
/// Implemented by zero-sized marker types so one controller implementation
/// serves the catalog and every dashboard list.
pub trait Resource: Send + Sync + 'static {
    type Item: Debug + Clone + DeserializeOwned + Send + Sync + 'static;
    type Filter: FilterValue;

    /// Path of the collection endpoint relative to the API base URL.
    const PATH: &'static str;

    /// Whether the endpoint is personalised and needs a bearer credential.
    const REQUIRES_AUTH: bool;
}

/// Shorthand for the query type of a resource.
pub type ResourceQuery<R> = ListQuery<<R as Resource>::Filter>;

/// Shorthand for the page type of a resource.
pub type ResourcePage<R> = PageResult<<R as Resource>::Item>;

/// Anything that can answer a list query for a resource.
#[async_trait]
pub trait CollectionSource<R: Resource>: Send + Sync {
    async fn fetch_page(&self, query: &ResourceQuery<R>) -> Result<ResourcePage<R>, ApiError>;
}
