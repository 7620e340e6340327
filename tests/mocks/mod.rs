#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use poem_relay::errors::RelayError;
use poem_relay::llm_client::CompletionClient;

/// Replays queued results in order and records every prompt it receives.
pub struct MockCompletionClient {
    responses: Arc<Mutex<VecDeque<Result<Option<String>, RelayError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_responses(responses: Vec<Result<Option<String>, RelayError>>) -> Self {
        let client = Self::new();
        for response in responses {
            client.add_response(response);
        }
        client
    }

    pub fn add_response(&self, response: Result<Option<String>, RelayError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, RelayError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::TransportError("no response queued".to_string())))
    }
}
