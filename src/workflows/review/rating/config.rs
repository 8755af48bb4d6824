use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bonus::GenreBonuses;
use super::confidence::ConfidenceParams;
use super::RatingError;
use crate::workflows::review::domain::Category;

/// Immutable table mapping each category to its maximum point allocation.
///
/// Built once at startup; the per-category maxima double as the validation
/// bound for incoming sub-scores. The standard allocation sums to 85, leaving
/// unallocated headroom below the 100-point overall ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    max_points: BTreeMap<Category, f64>,
}

impl CategoryWeights {
    pub fn standard() -> Self {
        Self::from_entries([
            (Category::VisualAesthetics, 15.0),
            (Category::ScreenplayQuality, 15.0),
            (Category::NarrativeStructure, 15.0),
            (Category::TechnicalProficiency, 10.0),
            (Category::Innovation, 10.0),
            (Category::CulturalImpact, 10.0),
            (Category::AudienceAppeal, 10.0),
        ])
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        Self {
            max_points: entries.into_iter().collect(),
        }
    }

    pub fn max_points(&self, category: Category) -> Result<f64, RatingError> {
        self.max_points
            .get(&category)
            .copied()
            .ok_or(RatingError::UnknownCategory(category))
    }

    pub fn total_possible(&self) -> f64 {
        self.max_points.values().sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.max_points.keys().copied()
    }
}

/// Complete rating configuration handed to the engine at construction time.
///
/// Explicit and immutable rather than ambient global state, so the engine
/// stays re-entrant and testable with alternate tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub weights: CategoryWeights,
    pub genre_bonuses: GenreBonuses,
    pub confidence: ConfidenceParams,
}

impl RatingConfig {
    pub fn standard() -> Self {
        Self {
            weights: CategoryWeights::standard(),
            genre_bonuses: GenreBonuses::standard(),
            confidence: ConfidenceParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_allocation_stays_under_the_overall_ceiling() {
        let weights = CategoryWeights::standard();
        assert_eq!(weights.total_possible(), 85.0);
        assert!(weights.total_possible() <= 100.0);
        assert_eq!(weights.categories().count(), Category::ALL.len());
    }

    #[test]
    fn lookup_of_a_missing_category_fails() {
        let weights = CategoryWeights::from_entries([(Category::VisualAesthetics, 15.0)]);
        assert_eq!(
            weights.max_points(Category::VisualAesthetics).unwrap(),
            15.0
        );
        assert!(matches!(
            weights.max_points(Category::Innovation),
            Err(RatingError::UnknownCategory(Category::Innovation))
        ));
    }
}
