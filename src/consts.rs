pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";
pub const COMPLETION_MODEL: &str = "meta-llama/llama-4-maverick";
pub const COMPLETION_TEMPERATURE: f64 = 0.9;

pub const DEFAULT_SERVER_PORT: u16 = 3000;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const API_URL_ENV: &str = "OPENROUTER_API_URL";
pub const PORT_ENV: &str = "PORT";

pub(crate) const DEFAULT_NAME: &str = "Someone Special";
pub(crate) const DEFAULT_TRAITS: &str = "kind, thoughtful, creative";
pub(crate) const DEFAULT_MOOD: &str = "heartfelt";
pub(crate) const DEFAULT_STYLE: &str = "rhyming";
pub(crate) const DEFAULT_TONE: &str = "gentle";
pub(crate) const DEFAULT_OCCASION: &str = "just because";
pub(crate) const DEFAULT_FAVORITES: &str = "";
pub(crate) const DEFAULT_WORD_COUNT: u64 = 50;

pub const NO_SELECTION_MESSAGE: &str = "No selection provided.";
pub const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
