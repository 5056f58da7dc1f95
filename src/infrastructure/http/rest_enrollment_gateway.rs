use super::api_client::{ApiClient, AuthMode};
use crate::domain::course::{entity::EnrollmentReceipt, repository::EnrollmentGateway};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

pub struct RestEnrollmentGateway {
    client: Arc<ApiClient>,
}

impl RestEnrollmentGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EnrollmentGateway for RestEnrollmentGateway {
    async fn enroll(&self, course_id: u64) -> Result<EnrollmentReceipt, ApiError> {
        let url = self
            .client
            .endpoint(&format!("courses/{}/enroll/", course_id))?;
        let receipt: Option<EnrollmentReceipt> = self
            .client
            .send(Method::POST, url, &json!({}), AuthMode::Required)
            .await?;
        Ok(receipt.unwrap_or_default())
    }
}
