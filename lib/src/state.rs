//! The frozen result of a fit.

use crate::config::PipelineConfig;
use crate::dataset::RawTable;
use crate::error::PipelineError;
use crate::preprocessing::{FittedOneHotEncoder, FittedStandardScaler, FittedTransformer};
use crate::table::FeatureTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything learned from one fit table.
///
/// A `FittedState` is immutable. It fixes the output column contract
/// ([`fitted_columns`](Self::fitted_columns)) and the statistics used to
/// standardize, and it carries the configuration it was fitted with so
/// apply mode cannot drift from it.
///
/// Persist it with [`SerializableParams`](crate::serialization::SerializableParams)
/// (`save_to_file`, `load_from_file`, bincode) or inspect it with [`to_json`](Self::to_json).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedState {
    config: PipelineConfig,
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
    scaler: FittedStandardScaler,
    encoder: FittedOneHotEncoder,
    fitted_columns: Vec<String>,
}

impl FittedState {
    pub(crate) fn new(
        config: PipelineConfig,
        scaler: FittedStandardScaler,
        encoder: FittedOneHotEncoder,
    ) -> Self {
        let mut fitted_columns = scaler.feature_names_out();
        fitted_columns.extend(encoder.feature_names_out());
        Self {
            config,
            numeric_columns: scaler.feature_names_in().to_vec(),
            categorical_columns: encoder.feature_names_in().to_vec(),
            scaler,
            encoder,
            fitted_columns,
        }
    }

    /// Configuration frozen at fit time.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Standardized columns, in output order. Excludes the target.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    /// One-hot expanded columns, in block order.
    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical_columns
    }

    /// Exact ordered output columns of every transform.
    pub fn fitted_columns(&self) -> &[String] {
        &self.fitted_columns
    }

    /// Fit-table mean of each numeric column.
    pub fn column_means(&self) -> BTreeMap<String, f64> {
        self.numeric_columns
            .iter()
            .cloned()
            .zip(self.scaler.mean().iter().copied())
            .collect()
    }

    /// Fit-table population std of each numeric column.
    pub fn column_stds(&self) -> BTreeMap<String, f64> {
        self.numeric_columns
            .iter()
            .cloned()
            .zip(self.scaler.std().iter().copied())
            .collect()
    }

    /// Numeric columns with zero variance at fit; always emitted as 0.0.
    pub fn degenerate_columns(&self) -> Vec<String> {
        self.scaler.degenerate_columns()
    }

    /// Categories seen at fit for one categorical column.
    pub fn categories(&self, column: &str) -> Option<&[String]> {
        let idx = self.categorical_columns.iter().position(|c| c == column)?;
        self.encoder.categories().get(idx).map(Vec::as_slice)
    }

    pub fn scaler(&self) -> &FittedStandardScaler {
        &self.scaler
    }

    pub fn encoder(&self) -> &FittedOneHotEncoder {
        &self.encoder
    }

    /// Apply this state to a new table. See [`crate::pipeline::transform`].
    pub fn transform(&self, table: &RawTable) -> Result<FeatureTable, PipelineError> {
        crate::pipeline::transform(self, table)
    }

    /// Pretty-printed JSON, for inspecting the column contract.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        serde_json::from_str(json).map_err(|e| PipelineError::Serialization(e.to_string()))
    }
}
