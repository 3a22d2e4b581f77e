use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Query, State};
use std::sync::Arc;

/// Query parameter carrying the text to classify
pub const TEXT_PARAM: &str = "textToAnalyze";

/// First value of `textToAnalyze`; later repeats are ignored.
pub fn text_to_analyze(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == TEXT_PARAM)
        .map(|(_, value)| value.as_str())
}

/// Emotion detection endpoint
///
/// Answers with plain text: either the score summary or the invalid-text
/// message. Classifier transport failures become a `502` error envelope.
pub async fn emotion_detector(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ServerResult<String> {
    let summary = state
        .summarizer
        .summarize(text_to_analyze(&params))
        .await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_value_wins() {
        let p = params(&[("textToAnalyze", "a"), ("textToAnalyze", "b")]);
        assert_eq!(text_to_analyze(&p), Some("a"));
    }

    #[test]
    fn other_parameters_are_ignored() {
        let p = params(&[("lang", "en"), ("textToAnalyze", "hi")]);
        assert_eq!(text_to_analyze(&p), Some("hi"));
        assert_eq!(text_to_analyze(&params(&[("lang", "en")])), None);
    }
}
