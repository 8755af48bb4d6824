use serde::{Deserialize, Serialize};

use super::RatingError;

/// Bounds on the plausible true score, derived from expert agreement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

/// Tunable constants for the interval estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceParams {
    /// Critical value scaling the standard error; 1.96 gives the familiar
    /// 95% interval.
    pub z: f64,
    /// Base half-width for a single-expert panel, scaled by how unsure that
    /// expert says they are.
    pub single_expert_spread: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            z: 1.96,
            single_expert_spread: 25.0,
        }
    }
}

/// Half-width of the interval around the panel mean.
///
/// For a real panel this is `z * stdev / sqrt(n)`, widened by how much
/// certainty the panel itself withholds: a panel that averages 0.6
/// self-confidence gets a 1.4x wider interval than one that is fully sure.
/// A panel of one has no dispersion to measure, so the half-width falls back
/// to `single_expert_spread * (1 - self_confidence)`.
pub(crate) fn half_width(
    overall_scores: &[f64],
    self_confidences: &[f64],
    params: &ConfidenceParams,
) -> Result<f64, RatingError> {
    match overall_scores.len() {
        0 => Err(RatingError::InsufficientData),
        1 => Ok(params.single_expert_spread * (1.0 - self_confidences[0]).max(0.0)),
        n => {
            let mean = overall_scores.iter().sum::<f64>() / n as f64;
            let variance = overall_scores
                .iter()
                .map(|score| (score - mean).powi(2))
                .sum::<f64>()
                / n as f64;
            let stdev = variance.sqrt();

            let avg_confidence =
                self_confidences.iter().sum::<f64>() / self_confidences.len() as f64;
            let widening = 1.0 + (1.0 - avg_confidence).max(0.0);

            Ok(params.z * stdev / (n as f64).sqrt() * widening)
        }
    }
}
