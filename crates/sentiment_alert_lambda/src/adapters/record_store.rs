use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use sentiment_alert_core::contract::OutputRecord;
use serde_json::Value;

pub trait RecordStore {
    fn put_record(&self, table: &str, record: &OutputRecord) -> Result<(), String>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn put_record(&self, table: &str, record: &OutputRecord) -> Result<(), String> {
        (**self).put_record(table, record)
    }
}

#[derive(Clone)]
pub struct DynamoRecordStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoRecordStore {
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

impl RecordStore for DynamoRecordStore {
    fn put_record(&self, table: &str, record: &OutputRecord) -> Result<(), String> {
        let item = record_to_item(record)?;
        let client = self.client.clone();
        let table_name = table.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!(
                            "failed to store record in DynamoDB: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

fn record_to_item(record: &OutputRecord) -> Result<HashMap<String, AttributeValue>, String> {
    let value = serde_json::to_value(record)
        .map_err(|error| format!("failed to serialize record: {error}"))?;
    match to_attribute_value(value) {
        AttributeValue::M(item) => Ok(item),
        _ => Err("record did not serialize to a JSON object".to_string()),
    }
}

fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(key, value)| (key, to_attribute_value(value)))
                .collect(),
        ),
    }
}
