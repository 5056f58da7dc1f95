//! Client data layer for the course platform: catalog and dashboard lists,
//! enrollment, and account flows over the platform REST API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
