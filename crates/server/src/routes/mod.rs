//! API route handlers
//!
//! - `detector`: `GET /emotionDetector`, the emotion summary
//! - `page`: `GET /`, the static index page
//! - `health`: liveness probe

pub mod detector;
pub mod health;
pub mod page;

use crate::error::ServerError;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
