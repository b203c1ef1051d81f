//! Pipeline configuration.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`FeaturePipeline`](crate::pipeline::FeaturePipeline).
///
/// The configuration a state was fitted with is frozen into the
/// [`FittedState`](crate::state::FittedState); apply mode never reads a fresh one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Name of the regression target column.
    pub target_column: String,
    /// Extra raw columns carried into the encoder unchanged. Their kind is
    /// inferred at fit time: numeric if every cell parses as a float,
    /// categorical otherwise.
    pub passthrough_columns: Vec<String>,
    /// Separator between column name and category in one-hot column names.
    pub category_separator: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_column: "price".to_string(),
            passthrough_columns: Vec::new(),
            category_separator: "_".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target column name.
    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into().to_lowercase();
        self
    }

    /// Set the passthrough columns.
    pub fn with_passthrough_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passthrough_columns = columns
            .into_iter()
            .map(|c| c.into().to_lowercase())
            .collect();
        self
    }

    /// Set the one-hot column name separator.
    pub fn with_category_separator(mut self, separator: impl Into<String>) -> Self {
        self.category_separator = separator.into();
        self
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.normalized()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the invariants `fit` relies on.
    ///
    /// # Errors
    /// [`PipelineError::Config`] if the target column is empty or is also
    /// listed as a passthrough column.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.target_column.is_empty() {
            return Err(PipelineError::Config(
                "target_column must not be empty".to_string(),
            ));
        }
        if self.passthrough_columns.contains(&self.target_column) {
            return Err(PipelineError::Config(format!(
                "target column '{}' cannot also be a passthrough column",
                self.target_column
            )));
        }
        Ok(())
    }

    fn normalized(mut self) -> Result<Self, PipelineError> {
        self.target_column = self.target_column.trim().to_lowercase();
        for column in &mut self.passthrough_columns {
            *column = column.trim().to_lowercase();
        }
        self.validate()?;
        Ok(self)
    }
}
