use std::sync::Mutex;

use sentiment_alert_core::contract::{OutputRecord, SentimentLabel, SentimentResult, SentimentScore};
use sentiment_alert_lambda::adapters::classifier::SentimentClassifier;
use sentiment_alert_lambda::adapters::notifier::AlertNotifier;
use sentiment_alert_lambda::adapters::record_store::RecordStore;
use sentiment_alert_lambda::handlers::analyze::InvocationContext;

pub const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:sentiment-alerts";

pub struct StubClassifier {
    response: Result<SentimentResult, String>,
    calls: Mutex<usize>,
}

impl StubClassifier {
    pub fn negative(score: f64) -> Self {
        Self::labelled(SentimentLabel::Negative, score)
    }

    pub fn labelled(label: SentimentLabel, negative: f64) -> Self {
        Self {
            response: Ok(SentimentResult {
                label,
                scores: SentimentScore {
                    negative: Some(negative),
                    positive: Some((1.0 - negative).max(0.0)),
                    ..SentimentScore::default()
                },
            }),
            calls: Mutex::new(0),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            response: Err(detail.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().expect("poisoned mutex")
    }
}

impl SentimentClassifier for StubClassifier {
    fn detect_sentiment(
        &self,
        _text: &str,
        _language_code: &str,
    ) -> Result<SentimentResult, String> {
        *self.calls.lock().expect("poisoned mutex") += 1;
        self.response.clone()
    }
}

#[derive(Default)]
pub struct CountingNotifier {
    calls: Mutex<usize>,
}

impl CountingNotifier {
    pub fn call_count(&self) -> usize {
        *self.calls.lock().expect("poisoned mutex")
    }
}

impl AlertNotifier for CountingNotifier {
    fn publish(
        &self,
        _topic: &str,
        _subject: &str,
        _message: &str,
    ) -> Result<Option<String>, String> {
        *self.calls.lock().expect("poisoned mutex") += 1;
        Ok(Some("sns-1".to_string()))
    }
}

#[derive(Default)]
pub struct CountingStore {
    records: Mutex<Vec<OutputRecord>>,
}

impl CountingStore {
    pub fn call_count(&self) -> usize {
        self.records.lock().expect("poisoned mutex").len()
    }
}

impl RecordStore for CountingStore {
    fn put_record(&self, _table: &str, record: &OutputRecord) -> Result<(), String> {
        self.records
            .lock()
            .expect("poisoned mutex")
            .push(record.clone());
        Ok(())
    }
}

pub fn invocation() -> InvocationContext {
    InvocationContext {
        request_id: Some("c6af9ac6-7b61-11e6-9a41-93e8deadbeef".to_string()),
        event_time: "2026-10-19T08:30:00.000000Z".to_string(),
    }
}
