use std::collections::BTreeMap;
use std::io::Read;

use super::PanelImportError;
use crate::workflows::review::domain::{Category, ExpertEvaluation, ExpertId};

const EXPERT: &str = "Expert";
const OVERALL_SCORE: &str = "Overall Score";
const SELF_CONFIDENCE: &str = "Self Confidence";
const COMMENT: &str = "Comment";
const REVIEW: &str = "Review";

/// Column plan derived from the header row: fixed fields by index, every
/// remaining column resolved to a category or rejected.
struct Layout {
    expert: usize,
    overall_score: usize,
    self_confidence: usize,
    comment: Option<usize>,
    review: Option<usize>,
    categories: Vec<(usize, Category)>,
}

pub(crate) fn parse_panel<R: Read>(reader: R) -> Result<Vec<ExpertEvaluation>, PanelImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let layout = plan_layout(&headers)?;

    let mut evaluations = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header is row 0 in the file; report data rows 1-based.
        evaluations.push(parse_row(&record, &layout, index + 1)?);
    }

    Ok(evaluations)
}

fn plan_layout(headers: &csv::StringRecord) -> Result<Layout, PanelImportError> {
    let mut expert = None;
    let mut overall_score = None;
    let mut self_confidence = None;
    let mut comment = None;
    let mut review = None;
    let mut categories = Vec::new();

    for (index, header) in headers.iter().enumerate() {
        if header.eq_ignore_ascii_case(EXPERT) {
            expert = Some(index);
        } else if header.eq_ignore_ascii_case(OVERALL_SCORE) {
            overall_score = Some(index);
        } else if header.eq_ignore_ascii_case(SELF_CONFIDENCE) {
            self_confidence = Some(index);
        } else if header.eq_ignore_ascii_case(COMMENT) {
            comment = Some(index);
        } else if header.eq_ignore_ascii_case(REVIEW) {
            review = Some(index);
        } else if let Some(category) = Category::from_label(header) {
            categories.push((index, category));
        } else {
            return Err(PanelImportError::UnknownColumn(header.to_string()));
        }
    }

    Ok(Layout {
        expert: expert.ok_or(PanelImportError::MissingColumn(EXPERT))?,
        overall_score: overall_score.ok_or(PanelImportError::MissingColumn(OVERALL_SCORE))?,
        self_confidence: self_confidence
            .ok_or(PanelImportError::MissingColumn(SELF_CONFIDENCE))?,
        comment,
        review,
        categories,
    })
}

fn parse_row(
    record: &csv::StringRecord,
    layout: &Layout,
    row: usize,
) -> Result<ExpertEvaluation, PanelImportError> {
    let expert_id = required_cell(record, layout.expert, EXPERT, row)?;
    let overall_score = parse_number(
        &required_cell(record, layout.overall_score, OVERALL_SCORE, row)?,
        OVERALL_SCORE,
        row,
    )?;
    let self_confidence = parse_number(
        &required_cell(record, layout.self_confidence, SELF_CONFIDENCE, row)?,
        SELF_CONFIDENCE,
        row,
    )?;

    let mut category_scores = BTreeMap::new();
    for &(index, category) in &layout.categories {
        if let Some(cell) = non_empty_cell(record, index) {
            let score = parse_number(cell, category.label(), row)?;
            category_scores.insert(category, score);
        }
    }

    Ok(ExpertEvaluation {
        expert_id: ExpertId(expert_id),
        category_scores,
        overall_score,
        self_confidence,
        comment: optional_text(record, layout.comment),
        review: optional_text(record, layout.review),
    })
}

fn required_cell(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<String, PanelImportError> {
    non_empty_cell(record, index)
        .map(str::to_string)
        .ok_or_else(|| PanelImportError::Field {
            row,
            detail: format!("column '{column}' is empty"),
        })
}

fn non_empty_cell(record: &csv::StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
}

fn optional_text(record: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|index| record.get(index))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn parse_number(cell: &str, column: &str, row: usize) -> Result<f64, PanelImportError> {
    cell.parse::<f64>().map_err(|err| PanelImportError::Field {
        row,
        detail: format!("column '{column}' value '{cell}' is not a number ({err})"),
    })
}
