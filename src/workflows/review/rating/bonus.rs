use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Signed additive score adjustments keyed by normalized genre label.
///
/// Applied once to the aggregate score, never per expert, and never
/// pre-clamped: the final clamp to `[0, 100]` happens exactly once in the
/// rating engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreBonuses {
    adjustments: BTreeMap<String, f64>,
}

impl GenreBonuses {
    /// Default adjustments for genres the panel historically under- or
    /// over-rewards relative to their craft.
    pub fn standard() -> Self {
        Self::from_entries([
            ("Documentary", 2.0),
            ("Film-Noir", 2.5),
            ("Experimental", 3.0),
            ("Animation", 1.5),
            ("Western", 1.5),
            ("Musical", 1.0),
            ("Blockbuster", -1.5),
        ])
    }

    /// Empty table; every genre resolves to zero.
    pub fn none() -> Self {
        Self {
            adjustments: BTreeMap::new(),
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let adjustments = entries
            .into_iter()
            .map(|(label, bonus)| (normalize_label(label.as_ref()), bonus))
            .collect();
        Self { adjustments }
    }

    /// Sums the adjustment of every listed genre. Unknown genres contribute
    /// zero; duplicates count each time they appear.
    pub fn resolve(&self, genres: &[String]) -> f64 {
        genres
            .iter()
            .map(|genre| {
                self.adjustments
                    .get(&normalize_label(genre))
                    .copied()
                    .unwrap_or(0.0)
            })
            .sum()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}
