pub mod controller;

pub use controller::{FetchOutcome, ListController, ResourceState};
