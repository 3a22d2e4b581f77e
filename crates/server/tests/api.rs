//! Router-level tests for the HTTP surface
//!
//! Requests are driven through the full middleware stack with
//! `tower::ServiceExt::oneshot`; the remote classifier is replaced by
//! in-process implementations.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use detection::{Classification, Classifier, DetectionError, EmotionScores, StaticClassifier};
use http_body_util::BodyExt;
use server::config::ServerConfig;
use server::routes::page::INDEX_HTML;
use server::{build_router, ServerState};
use tower::ServiceExt;

fn joyful() -> Classification {
    let scores: EmotionScores = [
        ("anger", 0.01),
        ("disgust", 0.02),
        ("fear", 0.03),
        ("joy", 0.9),
        ("sadness", 0.01),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), *v))
    .collect();
    Classification::Success {
        scores,
        dominant: "joy".into(),
    }
}

fn app_with(classifier: Arc<dyn Classifier>) -> Router {
    let state = ServerState::with_classifier(ServerConfig::default(), classifier);
    build_router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Remembers the text it was asked to classify.
struct EchoClassifier {
    seen: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl Classifier for EchoClassifier {
    async fn classify(&self, text: Option<&str>) -> Result<Classification, DetectionError> {
        self.seen.lock().unwrap().push(text.map(str::to_string));
        Ok(Classification::Failed)
    }
}

struct DownClassifier;

#[async_trait]
impl Classifier for DownClassifier {
    async fn classify(&self, _text: Option<&str>) -> Result<Classification, DetectionError> {
        Err(DetectionError::Http {
            status: 503,
            body: "service unavailable".into(),
        })
    }
}

#[tokio::test]
async fn detector_returns_plain_text_summary() {
    let app = app_with(Arc::new(StaticClassifier::new(joyful())));

    let (status, headers, body) = get(app, "/emotionDetector?textToAnalyze=I%20love%20this").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(
        body,
        "For the given statement, the system response is 'anger': 0.01, 'disgust': 0.02, \
         'fear': 0.03, 'sadness': 0.01. The dominant emotion is joy."
    );
}

#[tokio::test]
async fn detector_invalid_text_is_still_ok() {
    let app = app_with(Arc::new(StaticClassifier::failing()));

    let (status, _, body) = get(app, "/emotionDetector?textToAnalyze=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Invalid text! Try again.");
}

#[tokio::test]
async fn detector_passes_decoded_text_and_missing_parameter() {
    let classifier = Arc::new(EchoClassifier {
        seen: Mutex::new(Vec::new()),
    });

    let (_, _, body) = get(
        app_with(classifier.clone()),
        "/emotionDetector?textToAnalyze=I+am+%22so%22+happy",
    )
    .await;
    assert_eq!(body, "Invalid text! Try again.");

    let (status, _, body) = get(app_with(classifier.clone()), "/emotionDetector").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Invalid text! Try again.");

    let seen = classifier.seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![Some("I am \"so\" happy".to_string()), None]
    );
}

#[tokio::test]
async fn repeated_parameter_uses_first_value() {
    let classifier = Arc::new(EchoClassifier {
        seen: Mutex::new(Vec::new()),
    });

    let (status, _, body) = get(
        app_with(classifier.clone()),
        "/emotionDetector?textToAnalyze=first&textToAnalyze=second",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Invalid text! Try again.");
    assert_eq!(
        *classifier.seen.lock().unwrap(),
        vec![Some("first".to_string())]
    );
}

#[tokio::test]
async fn classifier_outage_maps_to_bad_gateway() {
    let app = app_with(Arc::new(DownClassifier));

    let (status, _, body) = get(app, "/emotionDetector?textToAnalyze=hello").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "DETECTION_ERROR");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("service unavailable"));
}

#[tokio::test]
async fn index_page_is_served_unchanged() {
    let app = app_with(Arc::new(StaticClassifier::failing()));

    let (status, headers, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app_with(Arc::new(StaticClassifier::failing()));

    let (status, _, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "emotion-server");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app_with(Arc::new(StaticClassifier::failing()));

    let (status, _, body) = get(app, "/api/v1/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_generated_and_echoed() {
    let app = app_with(Arc::new(StaticClassifier::failing()));

    let (_, headers, _) = get(app.clone(), "/health").await;
    let generated = headers["x-request-id"].to_str().unwrap();
    assert!(!generated.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}
