use super::api_client::{ApiClient, AuthMode};
use super::envelope::Envelope;
use crate::domain::listing::resource::{CollectionSource, Resource, ResourcePage, ResourceQuery};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;
use reqwest::Url;
use std::marker::PhantomData;
use std::sync::Arc;

/// Fetches pages of `R` from its collection endpoint.
pub struct HttpCollectionSource<R> {
    client: Arc<ApiClient>,
    page_size: u32,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpCollectionSource<R> {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            _resource: PhantomData,
        }
    }

    /// `{base}/{PATH}?page=n[&{filter}=v][&search=term]`
    pub fn request_url(&self, query: &ResourceQuery<R>) -> Result<Url, ApiError> {
        let mut url = self.client.endpoint(R::PATH)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("page", &query.page().to_string());
            if let Some((param, value)) = query.filter().as_query_pair() {
                qp.append_pair(param, value);
            }
            if let Some(term) = query.search() {
                qp.append_pair("search", term);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl<R: Resource> CollectionSource<R> for HttpCollectionSource<R> {
    async fn fetch_page(&self, query: &ResourceQuery<R>) -> Result<ResourcePage<R>, ApiError> {
        let url = self.request_url(query)?;
        let envelope: Envelope<R::Item> = self
            .client
            .get(url, AuthMode::for_resource(R::REQUIRES_AUTH))
            .await?;
        envelope.into_page(self.page_size)
    }
}
