//! Expert panel aggregation and rating engine.
//!
//! Pure, synchronous reduction of N collected evaluations into one verdict.
//! Every failure surfaces as a typed [`RatingError`]; nothing is retried or
//! silently defaulted here, since a corrupt panel must never produce a
//! quietly wrong aggregate.

mod bonus;
mod config;
mod confidence;
mod tier;

pub use bonus::GenreBonuses;
pub use config::{CategoryWeights, RatingConfig};
pub use confidence::{ConfidenceInterval, ConfidenceParams};
pub use tier::{classify, Tier};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workflows::review::domain::{Category, ExpertEvaluation, ExpertId};

/// Error raised while aggregating a panel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("no expert evaluations were collected for this panel")]
    InsufficientData,
    #[error("malformed evaluation from expert '{expert_id}': {detail}")]
    MalformedEvaluation { expert_id: ExpertId, detail: String },
    #[error("category '{0}' is not present in the weighting table")]
    UnknownCategory(Category),
}

/// Cross-expert average for one category, keeping contributor counts so a
/// thinly rated category is visibly thin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryAverage {
    Rated { mean: f64, contributors: usize },
    /// No expert supplied this category. Reported explicitly rather than as
    /// a zero average, which would misread abstention as condemnation.
    Unrated,
}

/// Terminal artifact of a review run, handed to presentation as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    /// Equal-weight mean of the panel's overall scores, genre-adjusted and
    /// clamped to `[0, 100]`.
    pub mean_score: f64,
    pub confidence_interval: ConfidenceInterval,
    pub category_breakdown: BTreeMap<Category, CategoryAverage>,
    pub tier: Tier,
    /// The adjustment actually added, kept for auditability.
    pub genre_bonus_applied: f64,
}

/// Stateless engine applying one immutable [`RatingConfig`] to panels.
///
/// Each `aggregate` call is independent and re-entrant; the engine holds no
/// mutable state, so one instance can serve concurrent requests.
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Reduces a non-empty, ordered panel to a [`FinalVerdict`].
    ///
    /// The order of operations is fixed so identical inputs always produce
    /// identical verdicts: validate, break down categories, average overall
    /// scores in input order, apply the genre bonus, clamp once, derive the
    /// confidence interval from the raw (pre-bonus) scores, classify.
    pub fn aggregate(
        &self,
        evaluations: &[ExpertEvaluation],
        genres: &[String],
    ) -> Result<FinalVerdict, RatingError> {
        if evaluations.is_empty() {
            return Err(RatingError::InsufficientData);
        }
        for evaluation in evaluations {
            self.validate(evaluation)?;
        }

        let category_breakdown = self.category_breakdown(evaluations);

        let raw_mean = evaluations
            .iter()
            .map(|evaluation| evaluation.overall_score)
            .sum::<f64>()
            / evaluations.len() as f64;

        let genre_bonus_applied = self.config.genre_bonuses.resolve(genres);
        let mean_score = clamp_score(raw_mean + genre_bonus_applied);

        // Interval width reflects expert agreement only, never the bonus; the
        // interval is then re-centered on the published score so the bounds
        // always bracket it.
        let overall_scores: Vec<f64> = evaluations
            .iter()
            .map(|evaluation| evaluation.overall_score)
            .collect();
        let self_confidences: Vec<f64> = evaluations
            .iter()
            .map(|evaluation| evaluation.self_confidence)
            .collect();
        let half_width =
            confidence::half_width(&overall_scores, &self_confidences, &self.config.confidence)?;
        let confidence_interval = ConfidenceInterval {
            low: clamp_score(mean_score - half_width),
            high: clamp_score(mean_score + half_width),
        };

        let tier = tier::classify(mean_score);

        Ok(FinalVerdict {
            mean_score,
            confidence_interval,
            category_breakdown,
            tier,
            genre_bonus_applied,
        })
    }

    fn validate(&self, evaluation: &ExpertEvaluation) -> Result<(), RatingError> {
        let malformed = |detail: String| RatingError::MalformedEvaluation {
            expert_id: evaluation.expert_id.clone(),
            detail,
        };

        if !(0.0..=100.0).contains(&evaluation.overall_score) {
            return Err(malformed(format!(
                "overall score {} outside [0, 100]",
                evaluation.overall_score
            )));
        }
        if !(0.0..=1.0).contains(&evaluation.self_confidence) {
            return Err(malformed(format!(
                "self confidence {} outside [0, 1]",
                evaluation.self_confidence
            )));
        }

        for (&category, &score) in &evaluation.category_scores {
            let max = self
                .config
                .weights
                .max_points(category)
                .map_err(|_| malformed(format!("category '{category}' not in weighting table")))?;
            if !(0.0..=max).contains(&score) {
                return Err(malformed(format!(
                    "score {score} for '{category}' outside [0, {max}]"
                )));
            }
        }

        Ok(())
    }

    /// Per-category averages over only the experts that rated each category,
    /// walked in input order.
    fn category_breakdown(
        &self,
        evaluations: &[ExpertEvaluation],
    ) -> BTreeMap<Category, CategoryAverage> {
        self.config
            .weights
            .categories()
            .map(|category| {
                let mut sum = 0.0;
                let mut contributors = 0;
                for evaluation in evaluations {
                    if let Some(&score) = evaluation.category_scores.get(&category) {
                        sum += score;
                        contributors += 1;
                    }
                }

                let average = if contributors == 0 {
                    CategoryAverage::Unrated
                } else {
                    CategoryAverage::Rated {
                        mean: sum / contributors as f64,
                        contributors,
                    }
                };
                (category, average)
            })
            .collect()
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
