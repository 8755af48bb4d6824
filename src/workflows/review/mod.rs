//! Movie review workflow: the evaluation contract each expert must satisfy
//! and the aggregation that turns a collected panel into one verdict.
//!
//! Experts are interchangeable producers: anything that yields a conforming
//! [`ExpertEvaluation`] participates equally. Persona details never enter the
//! aggregation path.

pub mod domain;
pub mod panel;
pub mod rating;

#[cfg(test)]
mod tests;

pub use domain::{Category, ExpertEvaluation, ExpertId};
pub use panel::{PanelCsvImporter, PanelImportError};
pub use rating::{
    CategoryAverage, CategoryWeights, ConfidenceInterval, ConfidenceParams, FinalVerdict,
    GenreBonuses, RatingConfig, RatingEngine, RatingError, Tier,
};
