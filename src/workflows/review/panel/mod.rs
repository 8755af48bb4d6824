//! Replay of a collected review panel from a CSV export.
//!
//! A review run persists one row per expert; this importer turns such an
//! export back into the evaluation sequence the rating engine consumes. A
//! row that cannot be read faithfully fails the whole import — the importer
//! never substitutes a guessed score.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::review::domain::ExpertEvaluation;

#[derive(Debug, thiserror::Error)]
pub enum PanelImportError {
    #[error("failed to read panel export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid panel CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("panel export is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("panel export column '{0}' is not a known category")]
    UnknownColumn(String),
    #[error("panel export row {row}: {detail}")]
    Field { row: usize, detail: String },
}

pub struct PanelCsvImporter;

impl PanelCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ExpertEvaluation>, PanelImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ExpertEvaluation>, PanelImportError> {
        parser::parse_panel(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::review::domain::{Category, ExpertId};
    use std::io::Cursor;

    const EXPORT: &str = "\
Expert,Overall Score,Self Confidence,Visual Aesthetics,Screenplay Quality,Comment,Review
critic-1,82,0.9,13,12,Sharp and assured.,A confident piece of work.
critic-2,74.5,0.7,11.5,,Uneven but alive.,The middle act sags badly.
";

    #[test]
    fn import_reconstructs_the_panel_in_row_order() {
        let panel = PanelCsvImporter::from_reader(Cursor::new(EXPORT)).expect("panel imports");

        assert_eq!(panel.len(), 2);
        assert_eq!(panel[0].expert_id, ExpertId("critic-1".to_string()));
        assert_eq!(panel[0].overall_score, 82.0);
        assert_eq!(panel[0].self_confidence, 0.9);
        assert_eq!(
            panel[0].category_scores.get(&Category::VisualAesthetics),
            Some(&13.0)
        );
        assert_eq!(panel[0].comment, "Sharp and assured.");

        // Blank category cell means "not rated", not zero.
        assert_eq!(panel[1].overall_score, 74.5);
        assert!(!panel[1]
            .category_scores
            .contains_key(&Category::ScreenplayQuality));
        assert_eq!(
            panel[1].category_scores.get(&Category::VisualAesthetics),
            Some(&11.5)
        );
    }

    #[test]
    fn import_rejects_a_non_numeric_score() {
        let export = "\
Expert,Overall Score,Self Confidence
critic-1,eighty,0.9
";
        let result = PanelCsvImporter::from_reader(Cursor::new(export));
        match result {
            Err(PanelImportError::Field { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn import_rejects_an_unrecognized_column() {
        let export = "\
Expert,Overall Score,Self Confidence,Vibes
critic-1,80,0.9,11
";
        let result = PanelCsvImporter::from_reader(Cursor::new(export));
        match result {
            Err(PanelImportError::UnknownColumn(column)) => assert_eq!(column, "Vibes"),
            other => panic!("expected unknown column error, got {other:?}"),
        }
    }

    #[test]
    fn import_requires_the_core_columns() {
        let export = "Expert,Comment\ncritic-1,fine\n";
        let result = PanelCsvImporter::from_reader(Cursor::new(export));
        assert!(matches!(
            result,
            Err(PanelImportError::MissingColumn("Overall Score"))
        ));
    }
}
