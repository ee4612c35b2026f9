use sentiment_alert_core::alerting::DEFAULT_ALERT_SUBJECT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::adapters::notifier::AlertNotifier;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("SNS_TOPIC_ARN not configured")]
    ChannelNotConfigured,
    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishRequest {
    pub message: String,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub message_id: Option<String>,
}

/// Thin wrapper that publishes free-form text to the configured channel.
///
/// Unlike the analyze handler, which absorbs notification failures, this
/// hands every failure back to the caller, including a missing channel.
pub struct AlertPublisher<N> {
    channel: Option<String>,
    notifier: N,
}

impl<N: AlertNotifier> AlertPublisher<N> {
    pub fn new(channel: Option<String>, notifier: N) -> Self {
        Self { channel, notifier }
    }

    pub fn publish(
        &self,
        message: &str,
        subject: Option<&str>,
    ) -> Result<PublishReceipt, PublishError> {
        let topic = self
            .channel
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(PublishError::ChannelNotConfigured)?;
        let subject = subject.unwrap_or(DEFAULT_ALERT_SUBJECT);

        match self.notifier.publish(topic, subject, message) {
            Ok(message_id) => {
                info!(component = "alert_publisher", topic, subject, "published alert");
                Ok(PublishReceipt { message_id })
            }
            Err(detail) => {
                error!(component = "alert_publisher", topic, error = %detail, "failed to publish alert");
                Err(PublishError::Delivery(detail))
            }
        }
    }

    pub fn handle_request(&self, request: &PublishRequest) -> Result<PublishReceipt, PublishError> {
        self.publish(&request.message, request.subject.as_deref())
    }
}
