use std::collections::BTreeMap;

use crate::workflows::review::domain::{Category, ExpertEvaluation, ExpertId};
use crate::workflows::review::rating::{RatingConfig, RatingEngine};

pub(super) fn standard_engine() -> RatingEngine {
    RatingEngine::new(RatingConfig::standard())
}

pub(super) fn evaluation(id: &str, overall_score: f64, self_confidence: f64) -> ExpertEvaluation {
    ExpertEvaluation {
        expert_id: ExpertId(id.to_string()),
        category_scores: BTreeMap::new(),
        overall_score,
        self_confidence,
        comment: format!("{id} filed a one-liner"),
        review: format!("{id} filed a full review"),
    }
}

pub(super) fn evaluation_with_categories(
    id: &str,
    overall_score: f64,
    self_confidence: f64,
    categories: &[(Category, f64)],
) -> ExpertEvaluation {
    let mut evaluation = evaluation(id, overall_score, self_confidence);
    evaluation.category_scores = categories.iter().copied().collect();
    evaluation
}

pub(super) fn genres(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
