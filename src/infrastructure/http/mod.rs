pub mod api_client;
pub mod collection_source;
pub mod envelope;
pub mod rest_account_repository;
pub mod rest_dashboard_repository;
pub mod rest_enrollment_gateway;
