//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.

use crate::error::PipelineError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// A transformer learns parameters from training data and can then transform
/// new data using those learned parameters. This trait represents the
/// configurable, unfitted state.
///
/// # Example
/// ```
/// use laptop_features::preprocessing::{FittedTransformer, StandardScaler, Transformer};
/// use laptop_features::table::FeatureTable;
/// use ndarray::array;
///
/// let data = FeatureTable::new(vec!["ram_gb".into()], array![[4.0], [8.0], [12.0]])?;
/// let fitted = StandardScaler::new().fit(&data)?;
/// let scaled = fitted.transform(&data)?;
/// assert!((scaled.values()[[1, 0]]).abs() < 1e-12);
/// # Ok::<(), laptop_features::error::PipelineError>(())
/// ```
pub trait Transformer: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the training data.
    ///
    /// # Errors
    /// Returns [`PipelineError::EmptyData`] if there are no rows to learn from.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PipelineError>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(
        &self,
        data: &Self::Input,
    ) -> Result<(Self::Fitted, Self::Output), PipelineError> {
        let fitted = self.fit(data)?;
        let output = fitted.transform(data)?;
        Ok((fitted, output))
    }
}

/// Trait for fitted transformers ready for inference.
///
/// A fitted transformer is plain data: it is serializable through
/// [`SerializableParams`] and can be shared across threads.
pub trait FittedTransformer: Clone + SerializableParams + Send + Sync {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`PipelineError::ColumnMismatch`] if the input columns differ
    /// from those seen during fit.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PipelineError>;

    /// Names of the input columns seen during fit.
    fn feature_names_in(&self) -> &[String];

    /// Names of the output columns, in order.
    fn feature_names_out(&self) -> Vec<String>;

    /// Returns the number of features seen during fit.
    fn n_features_in(&self) -> usize {
        self.feature_names_in().len()
    }
}

/// Fail with [`PipelineError::ColumnMismatch`] unless `got` equals `expected`.
pub(crate) fn check_columns(expected: &[String], got: &[String]) -> Result<(), PipelineError> {
    if expected != got {
        return Err(PipelineError::ColumnMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        });
    }
    Ok(())
}
