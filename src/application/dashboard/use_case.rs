use crate::domain::dashboard::{entity::DashboardOverview, repository::DashboardRepository};
use crate::domain::shared::errors::ApiError;

pub struct DashboardUseCase {
    repository: Box<dyn DashboardRepository>,
}

impl DashboardUseCase {
    pub fn new(repository: Box<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.repository.overview().await
    }
}
