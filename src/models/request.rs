use serde::{self, Serialize};

use super::Role;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
}
