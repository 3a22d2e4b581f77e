use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::DetectionError;

/// Default Watson NLP EmotionPredict endpoint.
pub const DEFAULT_API_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Default model id sent in the `grpc-metadata-mm-model-id` header.
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Runtime configuration for the remote emotion classifier.
///
/// # Example
/// ```no_run
/// use detection::{DetectionConfig, WatsonClassifier};
///
/// let cfg = DetectionConfig {
///     api_url: "http://localhost:9000/EmotionPredict".into(),
///     timeout_secs: 5,
///     ..Default::default()
/// };
///
/// let _classifier = WatsonClassifier::new(cfg).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// EmotionPredict endpoint receiving `POST {"raw_document": {"text": ...}}`.
    pub api_url: String,
    /// Model id forwarded in the `grpc-metadata-mm-model-id` header.
    pub model_id: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            model_id: DEFAULT_MODEL_ID.into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl DetectionConfig {
    /// Reject configurations that could never produce a working client.
    pub fn validate(&self) -> Result<(), DetectionError> {
        if self.api_url.trim().is_empty() {
            return Err(DetectionError::InvalidConfig(
                "api_url must not be empty".into(),
            ));
        }
        if self.model_id.trim().is_empty() {
            return Err(DetectionError::InvalidConfig(
                "model_id must not be empty".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DetectionError::InvalidConfig(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = DetectionConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.model_id, DEFAULT_MODEL_ID);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn empty_url_rejected() {
        let cfg = DetectionConfig {
            api_url: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(DetectionError::InvalidConfig(msg)) if msg.contains("api_url")
        ));
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = DetectionConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_deserialize_fills_defaults() {
        let cfg: DetectionConfig =
            serde_json::from_str(r#"{ "api_url": "http://127.0.0.1:9000/predict" }"#).unwrap();
        assert_eq!(cfg.api_url, "http://127.0.0.1:9000/predict");
        assert_eq!(cfg.model_id, DEFAULT_MODEL_ID);
        assert_eq!(cfg.timeout_secs, 30);
    }
}
