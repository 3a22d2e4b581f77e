//! Emotion detector server binary
//!
//! Serves the index page and the `/emotionDetector` endpoint, backed by the
//! Watson NLP emotion service.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
