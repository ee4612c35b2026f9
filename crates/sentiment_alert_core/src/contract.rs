use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MISSING_TEXT_ERROR: &str = "No 'message' text provided.";
pub const CLASSIFIER_FAILURE_ERROR: &str = "Sentiment detection failed";
pub const FALLBACK_MESSAGE_ID: &str = "no-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
    Unknown,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Case-insensitive; anything the classifier sends that we do not
    /// recognize becomes `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            "MIXED" => Self::Mixed,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixed: Option<f64>,
}

impl SentimentScore {
    pub fn negative_or_zero(&self) -> f64 {
        self.negative.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub scores: SentimentScore,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub message_id: Option<String>,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub sentiment_score: SentimentScore,
    pub language_code: String,
    pub triggered_notification: bool,
    pub sns_topic: Option<String>,
    pub timestamp: String,
}

impl OutputRecord {
    pub fn new(
        message_id: Option<String>,
        text: impl Into<String>,
        result: SentimentResult,
        language_code: impl Into<String>,
        sns_topic: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            text: text.into(),
            sentiment: result.label,
            sentiment_score: result.scores,
            language_code: language_code.into(),
            triggered_notification: false,
            sns_topic,
            timestamp: timestamp.into(),
        }
    }

    /// Copy destined for durable storage: the partition key must not be empty.
    pub fn storage_item(&self, fallback_id: Option<&str>) -> Self {
        let mut item = self.clone();
        if item.message_id.as_deref().map_or(true, str::is_empty) {
            item.message_id = Some(
                fallback_id
                    .filter(|value| !value.is_empty())
                    .unwrap_or(FALLBACK_MESSAGE_ID)
                    .to_string(),
            );
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn negative_result() -> SentimentResult {
        SentimentResult {
            label: SentimentLabel::Negative,
            scores: SentimentScore {
                negative: Some(0.8),
                positive: Some(0.1),
                ..SentimentScore::default()
            },
        }
    }

    #[test]
    fn label_parse_is_case_insensitive_and_defaults_to_unknown() {
        assert_eq!(SentimentLabel::parse("mixed"), SentimentLabel::Mixed);
        assert_eq!(SentimentLabel::parse("Negative"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::parse("SARCASTIC"), SentimentLabel::Unknown);
        assert_eq!(SentimentLabel::parse(""), SentimentLabel::Unknown);
    }

    #[test]
    fn output_record_serializes_with_camel_case_keys() {
        let record = OutputRecord::new(
            None,
            "meh",
            negative_result(),
            "en",
            Some("arn:aws:sns:us-east-1:123456789012:alerts".to_string()),
            "2026-01-01T00:00:00.000000Z",
        );

        let value = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(
            value,
            json!({
                "messageId": null,
                "text": "meh",
                "sentiment": "NEGATIVE",
                "sentimentScore": {"Positive": 0.1, "Negative": 0.8},
                "languageCode": "en",
                "triggeredNotification": false,
                "snsTopic": "arn:aws:sns:us-east-1:123456789012:alerts",
                "timestamp": "2026-01-01T00:00:00.000000Z",
            })
        );
    }

    #[test]
    fn storage_item_backfills_missing_message_id() {
        let record = OutputRecord::new(None, "x", negative_result(), "en", None, "t");

        assert_eq!(
            record.storage_item(Some("req-1")).message_id.as_deref(),
            Some("req-1")
        );
        assert_eq!(
            record.storage_item(None).message_id.as_deref(),
            Some(FALLBACK_MESSAGE_ID)
        );
        assert!(record.message_id.is_none());
    }

    #[test]
    fn storage_item_keeps_existing_message_id() {
        let record = OutputRecord::new(
            Some("m-42".to_string()),
            "x",
            negative_result(),
            "en",
            None,
            "t",
        );

        assert_eq!(
            record.storage_item(Some("req-1")).message_id.as_deref(),
            Some("m-42")
        );
    }

    #[test]
    fn missing_negative_score_reads_as_zero() {
        assert_eq!(SentimentScore::default().negative_or_zero(), 0.0);
    }
}
