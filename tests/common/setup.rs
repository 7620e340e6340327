use std::sync::Arc;

use reqwest::Client;

use poem_relay::llm_client::{CompletionClient, LLMClient};
use poem_relay::service::PoemService;

pub const TEST_API_KEY: &str = "test-key";

/// Nothing listens on port 1, so every call fails at connect time.
pub const DEAD_PROVIDER_URL: &str = "http://127.0.0.1:1";

pub fn create_llm_client(base_url: &str) -> LLMClient {
    LLMClient::new(Client::new(), base_url, TEST_API_KEY)
}

pub fn create_test_service(base_url: &str) -> Arc<PoemService> {
    Arc::new(PoemService::new(Arc::new(create_llm_client(base_url))))
}

pub fn create_service_with_client(client: Arc<dyn CompletionClient>) -> Arc<PoemService> {
    Arc::new(PoemService::new(client))
}
