use super::entity::EnrollmentReceipt;
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait EnrollmentGateway: Send + Sync {
    async fn enroll(&self, course_id: u64) -> Result<EnrollmentReceipt, ApiError>;
}
