use crate::consts;
use crate::errors::RelayError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub port: u16,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RelayError>;
}

/// Reads configuration from process environment variables.
pub struct EnvConfigLoader<F = fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    lookup: F,
}

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EnvConfigLoader<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> ConfigLoader for EnvConfigLoader<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn load_config(&self) -> Result<Config, RelayError> {
        // A missing key is not an error here; the provider rejects the call instead.
        let api_key = (self.lookup)(consts::API_KEY_ENV).unwrap_or_default();

        let api_url = (self.lookup)(consts::API_URL_ENV)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| consts::OPENROUTER_API_URL.to_string());

        let port = match (self.lookup)(consts::PORT_ENV).filter(|port| !port.is_empty()) {
            Some(port) => port.trim().parse::<u16>()?,
            None => consts::DEFAULT_SERVER_PORT,
        };

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            port,
        })
    }
}

pub fn load_config() -> Result<Config, RelayError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
