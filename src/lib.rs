//! Umbrella crate for the emotion detector.
//!
//! [`EmotionSummarizer`] asks a [`Classifier`] for per-emotion scores and turns
//! the answer into the sentence served over HTTP. The formatting half lives in
//! [`render_summary`], which is pure and can be used on its own.

pub use detection::{
    Classification, Classifier, DetectionConfig, DetectionError, EmotionScores,
    StaticClassifier, WatsonClassifier,
};

use std::sync::Arc;

/// Returned verbatim whenever the classifier rejects the input.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Try again.";

/// Summarizes classifier output for one piece of text per call.
///
/// Holds no mutable state, so a single instance can be shared across tasks.
#[derive(Clone)]
pub struct EmotionSummarizer {
    classifier: Arc<dyn Classifier>,
}

impl EmotionSummarizer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Classify `text` and render the result.
    ///
    /// Makes exactly one classifier call. A rejected input is not an error and
    /// yields [`INVALID_TEXT_MESSAGE`]; transport or decoding failures from the
    /// classifier are returned unchanged.
    pub async fn summarize(&self, text: Option<&str>) -> Result<String, DetectionError> {
        let classification = self.classifier.classify(text).await?;
        match classification.dominant() {
            Some(dominant) => tracing::debug!(dominant, "emotion classified"),
            None => tracing::debug!("classification failed; returning invalid-text message"),
        }
        Ok(render_summary(&classification))
    }
}

impl std::fmt::Debug for EmotionSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionSummarizer").finish_non_exhaustive()
    }
}

/// Render a classification as the user-facing sentence.
///
/// Every score except the dominant one is listed as `'label': score`, in the
/// classifier's order, followed by the dominant label.
pub fn render_summary(classification: &Classification) -> String {
    let (scores, dominant) = match classification {
        Classification::Success { scores, dominant } => (scores, dominant),
        Classification::Failed => return INVALID_TEXT_MESSAGE.to_string(),
    };

    let pairs = scores
        .iter()
        .filter(|(label, _)| *label != dominant)
        .map(|(label, score)| format!("'{label}': {}", format_score(*score)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "For the given statement, the system response is {pairs}. The dominant emotion is {dominant}."
    )
}

/// Shortest round-trip form, printed the way Python's `repr(float)` does.
///
/// Decimal exponents from -4 to 15 print positionally, integral values keep a
/// trailing `.0`, and anything else uses `{mantissa}e{sign}{exp:02}`.
fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "nan".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if score == 0.0 {
        return if score.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{score:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if (-4..16).contains(&exponent) {
        if score.fract() == 0.0 {
            format!("{score:.1}")
        } else {
            score.to_string()
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
