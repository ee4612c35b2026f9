use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::LanguageCode;
use sentiment_alert_core::contract::{SentimentLabel, SentimentResult, SentimentScore};

pub trait SentimentClassifier {
    fn detect_sentiment(&self, text: &str, language_code: &str)
        -> Result<SentimentResult, String>;
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for &T {
    fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentResult, String> {
        (**self).detect_sentiment(text, language_code)
    }
}

#[derive(Clone)]
pub struct ComprehendClassifier {
    client: aws_sdk_comprehend::Client,
}

impl ComprehendClassifier {
    pub fn new(client: aws_sdk_comprehend::Client) -> Self {
        Self { client }
    }
}

impl SentimentClassifier for ComprehendClassifier {
    fn detect_sentiment(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<SentimentResult, String> {
        let client = self.client.clone();
        let text = text.to_string();
        let language_code = LanguageCode::from(language_code);

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .detect_sentiment()
                    .text(text)
                    .language_code(language_code)
                    .send()
                    .await
                    .map_err(|error| {
                        format!(
                            "Comprehend detect_sentiment failed: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })?;

        let label = output
            .sentiment()
            .map(|sentiment| SentimentLabel::parse(sentiment.as_str()))
            .unwrap_or(SentimentLabel::Unknown);
        let scores = output
            .sentiment_score()
            .map(|score| SentimentScore {
                positive: score.positive().map(widen_score),
                negative: score.negative().map(widen_score),
                neutral: score.neutral().map(widen_score),
                mixed: score.mixed().map(widen_score),
            })
            .unwrap_or_default();

        Ok(SentimentResult { label, scores })
    }
}

/// Comprehend reports `f32`; going through the shortest decimal form keeps
/// `0.95` from turning into `0.949999988079071` in the response body.
fn widen_score(value: f32) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value))
}
