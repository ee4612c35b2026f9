use chrono::{SecondsFormat, Utc};
use sentiment_alert_core::alerting::{alert_subject, should_alert};
use sentiment_alert_core::config::HandlerConfig;
use sentiment_alert_core::contract::{
    OutputRecord, CLASSIFIER_FAILURE_ERROR, MISSING_TEXT_ERROR,
};
use sentiment_alert_core::request::{parse_body, resolve_request, ParsedBody};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::adapters::classifier::SentimentClassifier;
use crate::adapters::notifier::AlertNotifier;
use crate::adapters::record_store::RecordStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Per-invocation facts supplied by the runtime rather than the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub event_time: String,
}

impl InvocationContext {
    pub fn now(request_id: Option<String>) -> Self {
        Self {
            request_id,
            event_time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

pub struct AnalyzeHandler<C, N, S> {
    config: HandlerConfig,
    classifier: C,
    notifier: N,
    store: S,
}

impl<C, N, S> AnalyzeHandler<C, N, S>
where
    C: SentimentClassifier,
    N: AlertNotifier,
    S: RecordStore,
{
    pub fn new(config: HandlerConfig, classifier: C, notifier: N, store: S) -> Self {
        Self {
            config,
            classifier,
            notifier,
            store,
        }
    }

    pub fn handle_event(&self, event: Value, context: &InvocationContext) -> ApiGatewayResponse {
        info!(component = "analyze_handler", payload = %event, "received event");

        let body = parse_body(&event);
        if let ParsedBody::Malformed(reason) = &body {
            warn!(
                component = "analyze_handler",
                reason = %reason,
                "request body ignored"
            );
        }

        let request = resolve_request(&event, &body);
        if !request.has_text() {
            warn!(component = "analyze_handler", "no text provided in the request");
            return error_response(400, json!({ "error": MISSING_TEXT_ERROR }));
        }

        let result = match self
            .classifier
            .detect_sentiment(&request.text, &self.config.language_code)
        {
            Ok(value) => value,
            Err(detail) => {
                error!(component = "analyze_handler", error = %detail, "sentiment detection failed");
                return error_response(
                    500,
                    json!({
                        "error": CLASSIFIER_FAILURE_ERROR,
                        "details": detail,
                    }),
                );
            }
        };

        let alert = should_alert(&result, self.config.negative_threshold);
        let mut output = OutputRecord::new(
            request.message_id,
            request.text,
            result,
            self.config.language_code.clone(),
            self.config.notification_channel.clone(),
            context.event_time.clone(),
        );

        if alert {
            output.triggered_notification = self.dispatch_alert(&output);
        }

        if let Some(table) = self.config.storage_target.as_deref() {
            self.store_output(table, &output, context);
        }

        info!(
            component = "analyze_handler",
            message_id = output.message_id.as_deref().unwrap_or_default(),
            sentiment = %output.sentiment,
            triggered_notification = output.triggered_notification,
            "request completed"
        );
        success_response(200, &output)
    }

    fn dispatch_alert(&self, output: &OutputRecord) -> bool {
        let Some(topic) = self.config.notification_channel.as_deref() else {
            warn!(
                component = "analyze_handler",
                "SNS_TOPIC_ARN not configured, skipping alert"
            );
            return false;
        };

        let message = match serde_json::to_string_pretty(output) {
            Ok(value) => value,
            Err(error) => {
                error!(component = "analyze_handler", error = %error, "failed to render alert payload");
                return false;
            }
        };

        match self
            .notifier
            .publish(topic, &alert_subject(output.sentiment), &message)
        {
            Ok(_) => {
                info!(component = "analyze_handler", topic, "published alert");
                true
            }
            Err(detail) => {
                error!(component = "analyze_handler", topic, error = %detail, "failed to publish alert");
                false
            }
        }
    }

    fn store_output(&self, table: &str, output: &OutputRecord, context: &InvocationContext) {
        let item = output.storage_item(context.request_id.as_deref());
        match self.store.put_record(table, &item) {
            Ok(()) => info!(component = "analyze_handler", table, "stored result"),
            Err(detail) => {
                error!(component = "analyze_handler", table, error = %detail, "failed to store result")
            }
        }
    }
}

fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(&payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
        },
        Err(error) => error_response(
            500,
            json!({
                "error": "serialization_error",
                "details": error.to_string(),
            }),
        ),
    }
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}
