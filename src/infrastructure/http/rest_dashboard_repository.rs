use super::api_client::{ApiClient, AuthMode};
use crate::domain::dashboard::{entity::DashboardOverview, repository::DashboardRepository};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;
use std::sync::Arc;

pub struct RestDashboardRepository {
    client: Arc<ApiClient>,
}

impl RestDashboardRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for RestDashboardRepository {
    async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        let url = self.client.endpoint("dashboard/overview/")?;
        self.client.get(url, AuthMode::Required).await
    }
}
