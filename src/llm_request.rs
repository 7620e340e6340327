use serde_json::Value;

use crate::consts;
use crate::errors::RelayError;
use crate::models::Role;
use crate::models::request::{ChatCompletionCreate, Message};
use crate::models::response::ChatCompletionResponse;

pub fn build_completion_request(prompt: &str) -> ChatCompletionCreate {
    ChatCompletionCreate {
        model: consts::COMPLETION_MODEL.to_string(),
        messages: vec![Message {
            role: Role::User,
            content: prompt.to_string(),
        }],
        temperature: consts::COMPLETION_TEMPERATURE,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn upstream_error_message(error: &Value) -> String {
    match error.get("message").filter(|msg| is_truthy(msg)) {
        Some(Value::String(msg)) => msg.clone(),
        Some(msg) => msg.to_string(),
        None => consts::UNKNOWN_UPSTREAM_ERROR.to_string(),
    }
}

/// Returns the trimmed text of the first choice.
///
/// `Ok(None)` means the body had no content where it was expected. That is
/// left for the caller to interpret; it is not treated as a failure here.
pub fn extract_completion(response: &ChatCompletionResponse) -> Result<Option<String>, RelayError> {
    if let Some(error) = response.error.as_ref().filter(|e| is_truthy(e)) {
        log::error!("error from provider: {}", error);
        return Err(RelayError::UpstreamError(upstream_error_message(error)));
    }

    Ok(response.first_content().map(|content| content.trim().to_string()))
}
