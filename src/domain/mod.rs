pub mod certificate;
pub mod course;
pub mod dashboard;
pub mod enrollment;
pub mod listing;
pub mod quiz;
pub mod shared;
pub mod user;
