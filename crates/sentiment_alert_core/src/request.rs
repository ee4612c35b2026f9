use serde_json::{Map, Value};

/// Outcome of unwrapping an API Gateway style `body`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    /// `body` was a string holding an encoded JSON object.
    Decoded(Map<String, Value>),
    /// `body` is absent or not a string; the event itself carries the fields.
    Flat,
    /// `body` was a string that did not decode to a JSON object.
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub message_id: Option<String>,
    pub text: String,
}

impl ResolvedRequest {
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

pub fn parse_body(event: &Value) -> ParsedBody {
    let Some(body) = event.as_object().and_then(|object| object.get("body")) else {
        return ParsedBody::Flat;
    };

    match body {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => ParsedBody::Decoded(map),
            Ok(other) => ParsedBody::Malformed(format!(
                "body decoded to {} instead of an object",
                json_kind(&other)
            )),
            Err(error) => ParsedBody::Malformed(format!("Malformed JSON body: {error}")),
        },
        _ => ParsedBody::Flat,
    }
}

/// Picks `messageId` and `text`, preferring decoded body fields and falling
/// back to the top-level event.
pub fn resolve_request(event: &Value, body: &ParsedBody) -> ResolvedRequest {
    let empty = Map::new();
    let body_fields = match body {
        ParsedBody::Decoded(map) => map,
        ParsedBody::Flat => event.as_object().unwrap_or(&empty),
        ParsedBody::Malformed(_) => &empty,
    };
    let event_fields = event.as_object().unwrap_or(&empty);

    let message_id = [
        body_fields.get("messageId"),
        body_fields.get("id"),
        event_fields.get("messageId"),
    ]
    .into_iter()
    .find_map(identifier_text);

    let text = [
        body_fields.get("message"),
        body_fields.get("text"),
        event_fields.get("message"),
    ]
    .into_iter()
    .find_map(non_empty_str)
    .unwrap_or_default();

    ResolvedRequest { message_id, text }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn identifier_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(number)) => Some(number.to_string()),
        other => non_empty_str(other),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
