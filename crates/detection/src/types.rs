use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Labels returned by the stock Watson emotion workflow, in response order.
pub const EMOTION_LABELS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];

/// Emotion label to score, in the order the classifier produced them.
///
/// Iteration order is part of the contract: downstream rendering lists the
/// scores exactly as the service returned them.
pub type EmotionScores = IndexMap<String, f64>;

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// Scores for every label plus the label with the highest score.
    Success {
        scores: EmotionScores,
        dominant: String,
    },
    /// The input was rejected (missing, empty, or refused by the service).
    Failed,
}

impl Classification {
    /// Build a classification from raw scores, picking the dominant label.
    ///
    /// The dominant label is the first one holding the maximal score, so ties
    /// resolve to the earliest label. An empty score set yields [`Classification::Failed`].
    pub fn from_scores(scores: EmotionScores) -> Self {
        let mut best: Option<(&String, f64)> = None;
        for (label, &score) in &scores {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((label, score)),
            }
        }

        match best.map(|(label, _)| label.clone()) {
            Some(dominant) => Classification::Success { scores, dominant },
            None => Classification::Failed,
        }
    }

    /// The dominant label, if classification succeeded.
    pub fn dominant(&self) -> Option<&str> {
        match self {
            Classification::Success { dominant, .. } => Some(dominant),
            Classification::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Classification::Failed)
    }
}
