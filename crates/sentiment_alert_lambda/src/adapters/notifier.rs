use aws_sdk_sns::error::DisplayErrorContext;

pub trait AlertNotifier {
    /// Returns the provider message id when the channel reports one.
    fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<Option<String>, String>;
}

impl<T: AlertNotifier + ?Sized> AlertNotifier for &T {
    fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<Option<String>, String> {
        (**self).publish(topic, subject, message)
    }
}

#[derive(Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

impl AlertNotifier for SnsNotifier {
    fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<Option<String>, String> {
        let client = self.client.clone();
        let topic_arn = topic.to_string();
        let subject = subject.to_string();
        let message = message.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .publish()
                    .topic_arn(topic_arn)
                    .subject(subject)
                    .message(message)
                    .send()
                    .await
                    .map(|output| output.message_id().map(str::to_string))
                    .map_err(|error| {
                        format!(
                            "failed to publish SNS message: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}
