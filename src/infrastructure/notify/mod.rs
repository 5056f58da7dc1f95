pub mod tracing_notifier;
pub mod traits;
