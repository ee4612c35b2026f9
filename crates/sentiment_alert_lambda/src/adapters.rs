pub mod classifier;
pub mod notifier;
pub mod record_store;
