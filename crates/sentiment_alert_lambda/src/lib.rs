//! AWS-oriented adapters and handlers for the sentiment alert Lambda.
//!
//! This crate owns runtime integration details (Lambda handlers, Comprehend,
//! SNS and DynamoDB adapters, log setup). Request contracts and the alert
//! decision come from `sentiment_alert_core`.

pub mod adapters;
pub mod handlers;
pub mod telemetry;
