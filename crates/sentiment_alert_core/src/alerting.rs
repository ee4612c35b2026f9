use crate::contract::{SentimentLabel, SentimentResult};

pub const DEFAULT_ALERT_SUBJECT: &str = "Sentiment Alert";

/// Label gating comes first: a POSITIVE result never alerts, whatever its
/// Negative score says. The threshold is inclusive.
pub fn should_alert(result: &SentimentResult, negative_threshold: f64) -> bool {
    matches!(
        result.label,
        SentimentLabel::Negative | SentimentLabel::Mixed
    ) && result.scores.negative_or_zero() >= negative_threshold
}

pub fn alert_subject(label: SentimentLabel) -> String {
    format!("{DEFAULT_ALERT_SUBJECT}: {label}")
}
