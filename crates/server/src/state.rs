use crate::config::ServerConfig;
use crate::error::ServerResult;
use detection::{Classifier, WatsonClassifier};
use emotion_detector::EmotionSummarizer;
use std::sync::Arc;

/// Shared application state
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Summarizer backed by the configured classifier (shared across requests)
    pub summarizer: EmotionSummarizer,
}

impl ServerState {
    /// Create server state talking to the configured Watson endpoint
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let classifier = WatsonClassifier::new(config.detection.clone())?;
        Ok(Self::with_classifier(config, Arc::new(classifier)))
    }

    /// Create server state around an arbitrary classifier
    pub fn with_classifier(config: ServerConfig, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            config: Arc::new(config),
            summarizer: EmotionSummarizer::new(classifier),
        }
    }
}
