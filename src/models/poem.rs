use std::fmt;

use serde::{self, Deserialize, Serialize};
use serde_json::Number;

/// `wordCount` as sent by clients: usually a number, sometimes a form value.
/// Any JSON number is kept as written, negative or fractional included.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WordCount {
    Number(Number),
    Text(String),
}

impl WordCount {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            WordCount::Number(n) => n.as_f64() == Some(0.0),
            WordCount::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCount::Number(n) => write!(f, "{}", n),
            WordCount::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub traits: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub favorites: Option<String>,
    #[serde(default)]
    pub word_count: Option<WordCount>,
}

/// A `PoemRequest` with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PoemDetails {
    pub name: String,
    pub traits: String,
    pub mood: String,
    pub style: String,
    pub tone: String,
    pub occasion: String,
    pub favorites: String,
    pub word_count: WordCount,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RegenerateRequest {
    #[serde(default)]
    pub selection: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PoemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
