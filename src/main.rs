use std::sync::Arc;

use poem_relay::app::create_app;
use poem_relay::config;
use poem_relay::llm_client::LLMClient;
use poem_relay::service::PoemService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing poem relay...");

    let config = config::load_config().map_err(std::io::Error::other)?;
    if config.api_key.is_empty() {
        log::warn!("OPENROUTER_API_KEY is not set, provider calls will be rejected");
    }

    // No request timeout: a slow provider holds the request open.
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(std::io::Error::other)?;

    let llm_client = LLMClient::new(http_client, &config.api_url, &config.api_key);
    let poem_service = Arc::new(PoemService::new(Arc::new(llm_client)));

    let server = actix_web::HttpServer::new(move || create_app(poem_service.clone()));

    log::info!(
        "Relaying to {} at http://localhost:{}",
        config.api_url,
        config.port
    );
    server.bind(("0.0.0.0", config.port))?.run().await
}
