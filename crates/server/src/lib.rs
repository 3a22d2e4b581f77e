//! Emotion detector server - HTTP front end for the emotion summarizer
//!
//! Endpoints:
//!
//! - `GET /` - static index page
//! - `GET /emotionDetector?textToAnalyze=<text>` - plain-text emotion summary
//! - `GET /health` - liveness probe
//!
//! Configuration comes from an optional `server.{toml,yaml,json}` file and
//! `EMOTION_SERVER__*` environment variables; see [`ServerConfig`].
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
