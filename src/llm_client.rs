use async_trait::async_trait;

use crate::errors::RelayError;
use crate::llm_request;
use crate::models::response::ChatCompletionResponse;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user message and returns the first choice's text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, RelayError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for LLMClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, RelayError> {
        let request = llm_request::build_completion_request(prompt);

        // Status is not checked: provider failures are reported in the body.
        let body = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .bytes()
            .await?;

        let response: ChatCompletionResponse = serde_json::from_slice(&body)?;
        llm_request::extract_completion(&response)
    }
}
