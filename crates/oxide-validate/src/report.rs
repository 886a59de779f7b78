//! JSON reports for validation outcomes.

use std::io::{self, Write};

use oxide_validate_core::{validate, Stage, StatementKind, ValidationOutcome};
use serde::Serialize;
use tracing::debug;

/// The flat report printed for each statement.
///
/// Absent fields are omitted from the JSON rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the statement was accepted.
    pub valid: bool,
    /// Kind of the accepted statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<StatementKind>,
    /// Error message of a rejected statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Character offset of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Stage that rejected the statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    /// What was expected at `position`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl From<&ValidationOutcome> for ValidationReport {
    fn from(outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid { statement_kind } => Self {
                valid: true,
                statement_type: Some(*statement_kind),
                error: None,
                position: None,
                stage: None,
                expected: None,
            },
            ValidationOutcome::Invalid {
                stage,
                message,
                position,
                expected,
                ..
            } => Self {
                valid: false,
                statement_type: None,
                error: Some(message.clone()),
                position: Some(*position),
                stage: Some(*stage),
                expected: Some(expected.clone()),
            },
        }
    }
}

/// Validates each statement and writes its report to `out`, one JSON
/// document per line (or per block when `pretty`).
///
/// Returns true if every statement was valid.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_reports<W: Write>(
    out: &mut W,
    statements: &[String],
    pretty: bool,
) -> io::Result<bool> {
    let mut all_valid = true;
    for (index, statement) in statements.iter().enumerate() {
        let outcome = validate(statement);
        debug!(index, valid = outcome.is_valid(), "validated statement");
        all_valid &= outcome.is_valid();

        let report = ValidationReport::from(&outcome);
        if pretty {
            serde_json::to_writer_pretty(&mut *out, &report)?;
        } else {
            serde_json::to_writer(&mut *out, &report)?;
        }
        writeln!(out)?;
    }
    Ok(all_valid)
}
