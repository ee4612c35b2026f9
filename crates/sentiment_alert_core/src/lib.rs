//! Shared sentiment alert domain primitives.
//!
//! This crate owns request normalization, the alert decision and the
//! response contracts. It intentionally excludes AWS SDK and Lambda runtime
//! concerns; those live in `sentiment_alert_lambda`.

pub mod alerting;
pub mod config;
pub mod contract;
pub mod request;
