pub mod analyze;
pub mod publisher;
