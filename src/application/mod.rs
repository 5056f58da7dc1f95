pub mod account;
pub mod dashboard;
pub mod enroll_course;
pub mod list_controller;
