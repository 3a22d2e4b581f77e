use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{Classification, Classifier, DetectionConfig, DetectionError, EmotionScores};

/// Header carrying the model id expected by the Watson runtime.
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

#[derive(Debug, Deserialize)]
struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions")]
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize)]
struct EmotionPrediction {
    emotion: EmotionScores,
}

/// Client for the Watson NLP `EmotionPredict` REST endpoint.
///
/// One `POST` per [`classify`](Classifier::classify) call; no retries. The
/// underlying `reqwest::Client` pools connections, so build one classifier and
/// share it.
#[derive(Debug, Clone)]
pub struct WatsonClassifier {
    client: reqwest::Client,
    cfg: DetectionConfig,
}

impl WatsonClassifier {
    pub fn new(cfg: DetectionConfig) -> Result<Self, DetectionError> {
        cfg.validate()?;
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .build()
            .map_err(|e| DetectionError::InvalidConfig(format!("HTTP client: {e}")))?;
        Ok(Self { client, cfg })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.cfg
    }

    async fn send_request(&self, text: &str) -> Result<Option<String>, DetectionError> {
        let response = self
            .client
            .post(&self.cfg.api_url)
            .header(MODEL_ID_HEADER, &self.cfg.model_id)
            .json(&build_payload(text))
            .send()
            .await
            .map_err(|e| DetectionError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::debug!(status = %status, "emotion service rejected input");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DetectionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl Classifier for WatsonClassifier {
    async fn classify(&self, text: Option<&str>) -> Result<Classification, DetectionError> {
        // The service answers 400 for blank documents; skip the round-trip.
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(Classification::Failed),
        };

        match self.send_request(text).await? {
            Some(body) => {
                let scores = parse_emotion_scores(&body)?;
                Ok(Classification::from_scores(scores))
            }
            None => Ok(Classification::Failed),
        }
    }
}

fn build_payload(text: &str) -> Value {
    json!({ "raw_document": { "text": text } })
}

/// Extract the first prediction's emotion scores, keeping document order.
pub fn parse_emotion_scores(body: &str) -> Result<EmotionScores, DetectionError> {
    let response: EmotionPredictResponse = serde_json::from_str(body)
        .map_err(|e| DetectionError::MalformedResponse(format!("invalid JSON response: {e}")))?;

    response
        .emotion_predictions
        .into_iter()
        .next()
        .map(|prediction| prediction.emotion)
        .ok_or_else(|| {
            DetectionError::MalformedResponse("response did not contain emotionPredictions".into())
        })
}
