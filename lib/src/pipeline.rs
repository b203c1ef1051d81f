//! Fit/transform orchestration.
//!
//! ```text
//! RawTable --assemble--> FeatureFrame --partition--> numeric FeatureTable  --StandardScaler--+
//!                                                  \-> CategoricalTable --OneHotEncoder----+--> FeatureTable
//! ```
//!
//! [`FeaturePipeline::fit`] is pure: it returns a fresh [`FittedState`]
//! together with the transformed training table and never looks at an earlier
//! state. [`transform`] takes the state explicitly. [`SharedPipeline`] is the
//! long-lived, thread-safe holder for services that refit while serving.

use crate::config::PipelineConfig;
use crate::dataset::RawTable;
use crate::error::{ParseError, PipelineError};
use crate::features::{assemble, ColumnValues, FeatureFrame, FeatureKind, FEATURE_SCHEMA};
use crate::preprocessing::{FittedTransformer, OneHotEncoder, StandardScaler, Transformer};
use crate::state::FittedState;
use crate::table::{CategoricalTable, FeatureTable};
use ndarray::{Array1, Array2};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless entry point: holds only configuration.
#[derive(Clone, Debug, Default)]
pub struct FeaturePipeline {
    config: PipelineConfig,
}

impl FeaturePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Learn a [`FittedState`] from `table` and return it with the
    /// transformed training table.
    ///
    /// The returned table has exactly `state.fitted_columns()` and carries the
    /// target vector separately.
    ///
    /// # Errors
    /// - [`PipelineError::Config`] for an invalid configuration.
    /// - [`PipelineError::MissingColumn`] when a raw, passthrough or target column is absent.
    /// - [`PipelineError::Parse`] for the first malformed required field.
    /// - [`PipelineError::EmptyData`] when the table has no rows.
    pub fn fit(&self, table: &RawTable) -> Result<(FittedState, FeatureTable), PipelineError> {
        self.config.validate()?;
        let frame = assemble(table, &self.config, true)?;
        if frame.n_rows == 0 {
            return Err(PipelineError::EmptyData(
                "cannot fit on a table with no rows".to_string(),
            ));
        }

        let (numeric_columns, categorical_columns) = infer_kinds(&frame);
        let (numeric, categorical) = partition(frame, &numeric_columns, &categorical_columns)?;

        let (scaler, scaled) = StandardScaler::new().fit_transform(&numeric)?;
        let (encoder, encoded) = OneHotEncoder::new()
            .with_separator(self.config.category_separator.clone())
            .fit_transform(&categorical)?;

        let state = FittedState::new(self.config.clone(), scaler, encoder);
        let output = scaled.hstack(&encoded)?;

        info!(
            rows = output.n_rows(),
            numeric = state.numeric_columns().len(),
            categorical = state.categorical_columns().len(),
            fitted_columns = state.fitted_columns().len(),
            degenerate = state.degenerate_columns().len(),
            "fitted feature pipeline"
        );

        Ok((state, output))
    }
}

/// Apply `state` to `table`.
///
/// Parsing is identical to fit. Numeric columns are standardized with the
/// frozen statistics, categorical columns are expanded and reindexed to the
/// fitted categories. The output always has exactly `state.fitted_columns()`.
/// A target column is extracted if present but not required.
pub fn transform(state: &FittedState, table: &RawTable) -> Result<FeatureTable, PipelineError> {
    let frame = assemble(table, state.config(), false)?;
    let (numeric, categorical) =
        partition(frame, state.numeric_columns(), state.categorical_columns())?;

    let scaled = state.scaler().transform(&numeric)?;
    let encoded = state.encoder().transform(&categorical)?;
    let output = scaled.hstack(&encoded)?;

    debug!(
        rows = output.n_rows(),
        columns = output.n_columns(),
        "transformed table"
    );
    Ok(output)
}

/// Fit with a given configuration. Shorthand for [`FeaturePipeline::fit`].
pub fn fit(
    table: &RawTable,
    config: &PipelineConfig,
) -> Result<(FittedState, FeatureTable), PipelineError> {
    FeaturePipeline::new(config.clone()).fit(table)
}

fn parses_as_number(cell: &str) -> bool {
    cell.trim().parse::<f64>().map_or(false, f64::is_finite)
}

/// Numeric and categorical column names, in output order.
///
/// Schema columns keep their declared kind. A passthrough column is numeric
/// iff every cell parses as a finite float.
fn infer_kinds(frame: &FeatureFrame) -> (Vec<String>, Vec<String>) {
    let mut numeric = Vec::new();
    let mut categorical = Vec::new();

    for spec in FEATURE_SCHEMA {
        match spec.kind() {
            FeatureKind::Numeric => numeric.push(spec.name.to_string()),
            FeatureKind::Categorical => categorical.push(spec.name.to_string()),
        }
    }

    for column in &frame.columns {
        if let ColumnValues::Raw(cells) = &column.values {
            if cells.iter().all(|c| parses_as_number(c)) {
                numeric.push(column.name.clone());
            } else {
                categorical.push(column.name.clone());
            }
        }
    }

    (numeric, categorical)
}

fn numeric_values(name: &str, values: ColumnValues) -> Result<Vec<f64>, PipelineError> {
    match values {
        ColumnValues::Numeric(v) => Ok(v),
        ColumnValues::Raw(cells) => cells
            .iter()
            .enumerate()
            .map(|(row, cell)| match cell.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(PipelineError::parse(
                    row,
                    ParseError::new(name, cell.as_str(), "expected a number, as at fit time"),
                )),
            })
            .collect(),
        ColumnValues::Categorical(_) => Err(PipelineError::Config(format!(
            "column '{}' is categorical but was fitted as numeric",
            name
        ))),
    }
}

fn categorical_values(name: &str, values: ColumnValues) -> Result<Vec<String>, PipelineError> {
    match values {
        ColumnValues::Categorical(v) | ColumnValues::Raw(v) => Ok(v),
        ColumnValues::Numeric(_) => Err(PipelineError::Config(format!(
            "column '{}' is numeric but was fitted as categorical",
            name
        ))),
    }
}

/// Split an assembled frame into the scaler's and the encoder's inputs.
fn partition(
    frame: FeatureFrame,
    numeric_columns: &[String],
    categorical_columns: &[String],
) -> Result<(FeatureTable, CategoricalTable), PipelineError> {
    let n_rows = frame.n_rows;
    let mut columns: std::collections::HashMap<String, ColumnValues> = frame
        .columns
        .into_iter()
        .map(|c| (c.name, c.values))
        .collect();
    let mut take = |name: &str| {
        columns
            .remove(name)
            .ok_or_else(|| PipelineError::missing_column(name))
    };

    let mut matrix = Array2::zeros((n_rows, numeric_columns.len()));
    for (j, name) in numeric_columns.iter().enumerate() {
        let values = numeric_values(name, take(name)?)?;
        matrix.column_mut(j).assign(&Array1::from(values));
    }
    let mut numeric = FeatureTable::new(numeric_columns.to_vec(), matrix)?;
    if let Some(target) = frame.target {
        numeric = numeric.with_target(Array1::from(target))?;
    }

    let mut categorical = CategoricalTable::new(n_rows);
    for name in categorical_columns {
        categorical.push_column(name.clone(), categorical_values(name, take(name)?)?)?;
    }

    Ok((numeric, categorical))
}

/// Thread-safe holder of the current [`FittedState`].
///
/// `fit` builds the new state without holding the lock and swaps it in under
/// the write lock. `transform` clones the current `Arc` under the read lock
/// and runs against that snapshot, so a concurrent refit never changes the
/// state an in-flight transform is reading.
#[derive(Debug, Default)]
pub struct SharedPipeline {
    pipeline: FeaturePipeline,
    state: RwLock<Option<Arc<FittedState>>>,
}

impl SharedPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            pipeline: FeaturePipeline::new(config),
            state: RwLock::new(None),
        }
    }

    /// Start from a previously fitted (for example, loaded) state.
    pub fn from_state(state: FittedState) -> Self {
        Self {
            pipeline: FeaturePipeline::new(state.config().clone()),
            state: RwLock::new(Some(Arc::new(state))),
        }
    }

    /// Fit on `table`, replace the current state and return the transformed
    /// training table. On error the current state is left untouched.
    pub fn fit(&self, table: &RawTable) -> Result<FeatureTable, PipelineError> {
        let (state, output) = self.pipeline.fit(table)?;
        *self.state.write() = Some(Arc::new(state));
        Ok(output)
    }

    /// Transform with the current state.
    ///
    /// # Errors
    /// [`PipelineError::Unfitted`] if no state has been fitted or loaded.
    pub fn transform(&self, table: &RawTable) -> Result<FeatureTable, PipelineError> {
        let state = self.snapshot().ok_or(PipelineError::Unfitted)?;
        transform(&state, table)
    }

    /// The current state, if any.
    pub fn snapshot(&self) -> Option<Arc<FittedState>> {
        self.state.read().clone()
    }

    pub fn is_fitted(&self) -> bool {
        self.state.read().is_some()
    }
}
