use super::entity::DashboardOverview;
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn overview(&self) -> Result<DashboardOverview, ApiError>;
}
