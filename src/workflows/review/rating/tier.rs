use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label bucket for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Timeless Masterpiece")]
    TimelessMasterpiece,
    #[serde(rename = "Exceptional")]
    Exceptional,
    #[serde(rename = "Outstanding")]
    Outstanding,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Mediocre")]
    Mediocre,
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    #[serde(rename = "Critically Flawed")]
    CriticallyFlawed,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::TimelessMasterpiece => "Timeless Masterpiece",
            Tier::Exceptional => "Exceptional",
            Tier::Outstanding => "Outstanding",
            Tier::Excellent => "Excellent",
            Tier::VeryGood => "Very Good",
            Tier::Good => "Good",
            Tier::AboveAverage => "Above Average",
            Tier::Average => "Average",
            Tier::BelowAverage => "Below Average",
            Tier::Mediocre => "Mediocre",
            Tier::Poor => "Poor",
            Tier::VeryPoor => "Very Poor",
            Tier::CriticallyFlawed => "Critically Flawed",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive lower bounds, highest first. Boundary values belong to the
/// higher tier; anything below the lowest bound collapses into it.
const LADDER: [(f64, Tier); 13] = [
    (95.0, Tier::TimelessMasterpiece),
    (90.0, Tier::Exceptional),
    (85.0, Tier::Outstanding),
    (80.0, Tier::Excellent),
    (75.0, Tier::VeryGood),
    (70.0, Tier::Good),
    (65.0, Tier::AboveAverage),
    (60.0, Tier::Average),
    (55.0, Tier::BelowAverage),
    (50.0, Tier::Mediocre),
    (40.0, Tier::Poor),
    (30.0, Tier::VeryPoor),
    (0.0, Tier::CriticallyFlawed),
];

/// Maps a clamped `[0, 100]` score to its qualitative tier. Total over the
/// whole range: every score lands in exactly one bucket.
pub fn classify(score: f64) -> Tier {
    for (lower_bound, tier) in LADDER {
        if score >= lower_bound {
            return tier;
        }
    }
    Tier::CriticallyFlawed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_covers_the_full_range_without_gaps() {
        // Bounds strictly descend and terminate at zero, so first-match-wins
        // partitions [0, 100] with no gap or overlap.
        for window in LADDER.windows(2) {
            assert!(window[0].0 > window[1].0, "ladder bounds must descend");
        }
        assert_eq!(LADDER[12].0, 0.0);

        for step in 0..=1000 {
            let tier = classify(step as f64 / 10.0);
            assert!(!tier.label().is_empty());
        }
    }

    #[test]
    fn boundary_scores_belong_to_the_higher_tier() {
        assert_eq!(classify(95.0), Tier::TimelessMasterpiece);
        assert_eq!(classify(94.9), Tier::Exceptional);
        assert_eq!(classify(85.0), Tier::Outstanding);
        assert_eq!(classify(80.0), Tier::Excellent);
        assert_eq!(classify(30.0), Tier::VeryPoor);
        assert_eq!(classify(29.9), Tier::CriticallyFlawed);
        assert_eq!(classify(0.0), Tier::CriticallyFlawed);
    }

    #[test]
    fn extremes_classify() {
        assert_eq!(classify(100.0), Tier::TimelessMasterpiece);
        assert_eq!(classify(50.0), Tier::Mediocre);
        assert_eq!(classify(49.9), Tier::Poor);
    }
}
