use lambda_runtime::{service_fn, Error, LambdaEvent};
use sentiment_alert_core::config::HandlerConfig;
use sentiment_alert_lambda::adapters::classifier::ComprehendClassifier;
use sentiment_alert_lambda::adapters::notifier::SnsNotifier;
use sentiment_alert_lambda::adapters::record_store::DynamoRecordStore;
use sentiment_alert_lambda::handlers::analyze::{
    AnalyzeHandler, ApiGatewayResponse, InvocationContext,
};
use sentiment_alert_lambda::telemetry::init_tracing;
use serde_json::Value;

type LambdaHandler = AnalyzeHandler<ComprehendClassifier, SnsNotifier, DynamoRecordStore>;

async fn handle_request(
    handler: &LambdaHandler,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    let context = InvocationContext::now(Some(event.context.request_id.clone()));
    Ok(handler.handle_event(event.payload, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env()?;
    init_tracing(&config.log_level);

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let handler = AnalyzeHandler::new(
        config,
        ComprehendClassifier::new(aws_sdk_comprehend::Client::new(&aws_config)),
        SnsNotifier::new(aws_sdk_sns::Client::new(&aws_config)),
        DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&aws_config)),
    );

    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(handler, event).await
    }))
    .await
}
