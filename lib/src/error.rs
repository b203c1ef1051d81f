//! Error types for parsing and pipeline operations.
//!
//! Two layers:
//! - [`ParseError`] is produced by a single field parser and knows only the
//!   column and the offending raw value.
//! - [`PipelineError`] is what every public pipeline call returns; parse
//!   failures are wrapped with the row they occurred in.

use thiserror::Error;

/// A raw field did not match the pattern its parser expects.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot parse column '{column}' from {value:?}: {reason}")]
pub struct ParseError {
    /// Lower-cased name of the raw column.
    pub column: String,
    /// The raw cell as it appeared in the input.
    pub value: String,
    /// What was expected.
    pub reason: String,
}

impl ParseError {
    pub fn new(
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for table construction, fitting, transforming and persistence.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required field failed to parse.
    #[error("row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ParseError,
    },
    /// A column the pipeline needs is absent from the input table.
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },
    /// `transform` was called before any state was fitted.
    #[error("pipeline has not been fitted")]
    Unfitted,
    /// Empty data provided where non-empty was required.
    #[error("empty data: {0}")]
    EmptyData(String),
    /// A row has a different number of cells than the header.
    #[error("row {row} has {got} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Column layout of a table does not match what a fitted step expects.
    #[error("column mismatch: expected {expected:?}, got {got:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },
    /// Two sequences that must be paired have different lengths.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    pub(crate) fn parse(row: usize, source: ParseError) -> Self {
        PipelineError::Parse { row, source }
    }

    pub(crate) fn missing_column(column: impl Into<String>) -> Self {
        PipelineError::MissingColumn {
            column: column.into(),
        }
    }
}

impl From<bincode::Error> for PipelineError {
    fn from(err: bincode::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_column_and_value() {
        let err = ParseError::new("ram", "eightGB", "expected an integer before 'GB'");
        let msg = err.to_string();
        assert!(msg.contains("'ram'"));
        assert!(msg.contains("\"eightGB\""));
    }

    #[test]
    fn test_pipeline_parse_error_carries_row() {
        let err = PipelineError::parse(7, ParseError::new("weight", "", "empty"));
        assert!(err.to_string().starts_with("row 7:"));
        assert!(matches!(err, PipelineError::Parse { row: 7, .. }));
    }

    #[test]
    fn test_missing_column_display() {
        let err = PipelineError::missing_column("weight");
        assert_eq!(err.to_string(), "missing required column 'weight'");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PipelineError = io_err.into();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: PipelineError = e.into();
            assert!(matches!(err, PipelineError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PipelineError::Unfitted;
        let _: &dyn std::error::Error = &err;
    }
}
