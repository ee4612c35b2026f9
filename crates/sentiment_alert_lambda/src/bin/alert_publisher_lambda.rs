use lambda_runtime::{service_fn, Error, LambdaEvent};
use sentiment_alert_core::config::HandlerConfig;
use sentiment_alert_lambda::adapters::notifier::SnsNotifier;
use sentiment_alert_lambda::handlers::publisher::{AlertPublisher, PublishReceipt, PublishRequest};
use sentiment_alert_lambda::telemetry::init_tracing;

async fn handle_request(
    publisher: &AlertPublisher<SnsNotifier>,
    event: LambdaEvent<PublishRequest>,
) -> Result<PublishReceipt, Error> {
    Ok(publisher.handle_request(&event.payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env()?;
    init_tracing(&config.log_level);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let publisher = AlertPublisher::new(
        config.notification_channel,
        SnsNotifier::new(aws_sdk_sns::Client::new(&aws_config)),
    );

    let publisher = &publisher;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<PublishRequest>| async move {
        handle_request(publisher, event).await
    }))
    .await
}
