use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for a panel member within one review run.
///
/// The id is opaque to aggregation; the persona behind it (name, background,
/// reviewing style) is produced and consumed outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpertId(pub String);

impl fmt::Display for ExpertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scored dimension of film quality.
///
/// Serialized under the human-readable labels the analysis services emit, so
/// a JSON or CSV payload reads `"Visual Aesthetics"` rather than an internal
/// identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Visual Aesthetics")]
    VisualAesthetics,
    #[serde(rename = "Screenplay Quality")]
    ScreenplayQuality,
    #[serde(rename = "Narrative Structure")]
    NarrativeStructure,
    #[serde(rename = "Technical Proficiency")]
    TechnicalProficiency,
    #[serde(rename = "Innovation")]
    Innovation,
    #[serde(rename = "Cultural Impact")]
    CulturalImpact,
    #[serde(rename = "Audience Appeal")]
    AudienceAppeal,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::VisualAesthetics,
        Category::ScreenplayQuality,
        Category::NarrativeStructure,
        Category::TechnicalProficiency,
        Category::Innovation,
        Category::CulturalImpact,
        Category::AudienceAppeal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::VisualAesthetics => "Visual Aesthetics",
            Category::ScreenplayQuality => "Screenplay Quality",
            Category::NarrativeStructure => "Narrative Structure",
            Category::TechnicalProficiency => "Technical Proficiency",
            Category::Innovation => "Innovation",
            Category::CulturalImpact => "Cultural Impact",
            Category::AudienceAppeal => "Audience Appeal",
        }
    }

    /// Resolves a human-readable column or key label back to a category.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One expert's complete assessment of one movie.
///
/// Instances arrive fully formed from the analysis services (or a panel CSV
/// replay) and are never mutated afterwards; the rating engine treats them as
/// an immutable input sequence. A category absent from `category_scores`
/// means the expert did not rate it, which is different from scoring it zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertEvaluation {
    pub expert_id: ExpertId,
    #[serde(default)]
    pub category_scores: BTreeMap<Category, f64>,
    /// Overall score on the 100-point scale. Usually the sum of the category
    /// scores, but stored independently because an expert may report it
    /// directly.
    pub overall_score: f64,
    /// The expert's own stated certainty in `[0, 1]`.
    pub self_confidence: f64,
    /// IMDB-style one-liner. Opaque to aggregation.
    #[serde(default)]
    pub comment: String,
    /// Detailed rationale. Opaque to aggregation.
    #[serde(default)]
    pub review: String,
}
