//! Emotion classification for free text.
//!
//! The actual inference happens in a remote service; this crate owns the
//! contract with it. A [`Classifier`] turns optional text into a
//! [`Classification`]: either ordered per-emotion scores with the dominant
//! label, or [`Classification::Failed`] when the input was rejected.
//!
//! [`WatsonClassifier`] talks to the Watson NLP `EmotionPredict` endpoint.
//! [`StaticClassifier`] returns a fixed answer and is meant for tests and
//! offline wiring.
//!
//! ```no_run
//! use detection::{Classifier, DetectionConfig, WatsonClassifier};
//!
//! # async fn run() -> Result<(), detection::DetectionError> {
//! let classifier = WatsonClassifier::new(DetectionConfig::default())?;
//! let outcome = classifier.classify(Some("I am glad this happened")).await?;
//! println!("{:?}", outcome.dominant());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod types;
mod watson;

use async_trait::async_trait;

pub use config::{DetectionConfig, DEFAULT_API_URL, DEFAULT_MODEL_ID};
pub use error::DetectionError;
pub use types::{Classification, EmotionScores, EMOTION_LABELS};
pub use watson::{parse_emotion_scores, WatsonClassifier, MODEL_ID_HEADER};

/// External emotion classification collaborator.
///
/// Implementations must return [`Classification::Failed`] exactly when the
/// input should be treated as invalid; every other outcome is either a
/// complete score set with its dominant label or a [`DetectionError`].
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: Option<&str>) -> Result<Classification, DetectionError>;
}

/// Classifier that answers every request with the same outcome.
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    outcome: Classification,
}

impl StaticClassifier {
    pub fn new(outcome: Classification) -> Self {
        Self { outcome }
    }

    pub fn failing() -> Self {
        Self::new(Classification::Failed)
    }
}

#[async_trait]
impl Classifier for StaticClassifier {
    async fn classify(&self, _text: Option<&str>) -> Result<Classification, DetectionError> {
        Ok(self.outcome.clone())
    }
}
