use std::sync::Arc;

use crate::errors::RelayError;
use crate::llm_client::CompletionClient;
use crate::models::poem::{PoemRequest, RegenerateRequest};
use crate::prompt;

#[derive(Clone)]
pub struct PoemService {
    client: Arc<dyn CompletionClient>,
}

impl PoemService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate_poem(&self, request: &PoemRequest) -> Result<Option<String>, RelayError> {
        let prompt = prompt::build_generation_prompt(request);
        log::debug!("generation prompt: {:?}", prompt);
        self.client.complete(&prompt).await
    }

    /// Validates the selection before anything is sent upstream.
    pub async fn regenerate(
        &self,
        request: &RegenerateRequest,
    ) -> Result<Option<String>, RelayError> {
        let prompt = prompt::build_regeneration_prompt(request.selection.as_deref())?;
        log::debug!("regeneration prompt: {:?}", prompt);
        self.client.complete(&prompt).await
    }
}
