use serde::{self, Deserialize};
use serde_json::Value;

// Every level is optional: the provider body is trusted only as far as it parses.

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    /// Provider error payload, usually `{"message": ..., "code": ...}` but not guaranteed.
    #[serde(default)]
    pub error: Option<Value>,
}

impl ChatCompletionResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}
