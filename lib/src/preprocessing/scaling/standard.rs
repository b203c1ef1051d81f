//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the training samples, and `s` is the population
//! standard deviation (ddof = 0).
//!
//! A column whose training std is zero (relative to its magnitude) is
//! *degenerate*: it carries no information and is emitted as constant 0.0
//! instead of dividing by zero.

use crate::error::PipelineError;
use crate::preprocessing::traits::{check_columns, FittedTransformer, Transformer};
use crate::table::FeatureTable;
use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relative tolerance below which a std counts as zero.
pub const DEGENERATE_STD_TOLERANCE: f64 = 1e-12;

/// StandardScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    pub fn new() -> Self {
        Self
    }
}

fn is_degenerate(mean: f64, std: f64) -> bool {
    !(std > DEGENERATE_STD_TOLERANCE * mean.abs().max(1.0))
}

impl Transformer for StandardScaler {
    type Input = FeatureTable;
    type Output = FeatureTable;
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &FeatureTable) -> Result<FittedStandardScaler, PipelineError> {
        let values = data.values();
        let mean = values.mean_axis(Axis(0)).ok_or_else(|| {
            PipelineError::EmptyData("Cannot fit StandardScaler on empty data".to_string())
        })?;
        let std = values.std_axis(Axis(0), 0.0);

        let degenerate: Vec<bool> = mean
            .iter()
            .zip(std.iter())
            .map(|(&m, &s)| is_degenerate(m, s))
            .collect();

        for (name, _) in data.columns().iter().zip(&degenerate).filter(|(_, d)| **d) {
            warn!(column = %name, "zero variance at fit; column will be emitted as 0.0");
        }

        Ok(FittedStandardScaler {
            columns: data.columns().to_vec(),
            mean: mean.to_vec(),
            std: std.to_vec(),
            degenerate,
        })
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedStandardScaler {
    columns: Vec<String>,
    mean: Vec<f64>,
    std: Vec<f64>,
    degenerate: Vec<bool>,
}

impl FittedStandardScaler {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Get the standard deviation values for each feature, as measured at fit.
    pub fn std(&self) -> &[f64] {
        &self.std
    }

    /// Names of the columns that had zero variance at fit.
    pub fn degenerate_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(&self.degenerate)
            .filter(|(_, d)| **d)
            .map(|(c, _)| c.clone())
            .collect()
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = FeatureTable;
    type Output = FeatureTable;

    fn transform(&self, data: &FeatureTable) -> Result<FeatureTable, PipelineError> {
        check_columns(&self.columns, data.columns())?;

        let mut values = data.values().clone();
        for (j, mut column) in values.axis_iter_mut(Axis(1)).enumerate() {
            if self.degenerate[j] {
                column.fill(0.0);
            } else {
                let (mean, std) = (self.mean[j], self.std[j]);
                column.mapv_inplace(|x| (x - mean) / std);
            }
        }

        let out = FeatureTable::new(self.columns.clone(), values)?;
        match data.target() {
            Some(target) => out.with_target(target.clone()),
            None => Ok(out),
        }
    }

    fn feature_names_in(&self) -> &[String] {
        &self.columns
    }

    fn feature_names_out(&self) -> Vec<String> {
        self.columns.clone()
    }
}

/// Population mean and std of each column of `table`.
pub fn column_moments(table: &FeatureTable) -> Option<(Array1<f64>, Array1<f64>)> {
    let mean = table.values().mean_axis(Axis(0))?;
    let std = table.values().std_axis(Axis(0), 0.0);
    Some((mean, std))
}
