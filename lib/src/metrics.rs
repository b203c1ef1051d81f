//! Metrics for evaluating regression models trained on the feature table.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Regression metrics over paired target/prediction slices.
pub struct Metrics;

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<(), PipelineError> {
    if y_true.len() != y_pred.len() {
        return Err(PipelineError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(PipelineError::EmptyData(
            "metrics need at least one prediction".to_string(),
        ));
    }
    Ok(())
}

impl Metrics {
    /// Calculate Mean Squared Error (MSE).
    ///
    /// MSE = mean((y_true - y_pred)^2)
    ///
    /// # Errors
    /// [`PipelineError::LengthMismatch`] if the slices differ in length,
    /// [`PipelineError::EmptyData`] if they are empty.
    pub fn mse(y_true: &[f64], y_pred: &[f64]) -> Result<f64, PipelineError> {
        check_lengths(y_true, y_pred)?;
        let sum_sq: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        Ok(sum_sq / y_true.len() as f64)
    }

    /// Calculate Root Mean Squared Error (RMSE).
    ///
    /// RMSE = sqrt(MSE), in the same units as the target.
    pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> Result<f64, PipelineError> {
        Self::mse(y_true, y_pred).map(f64::sqrt)
    }

    /// Calculate Mean Absolute Error (MAE).
    ///
    /// MAE = mean(|y_true - y_pred|)
    pub fn mae(y_true: &[f64], y_pred: &[f64]) -> Result<f64, PipelineError> {
        check_lengths(y_true, y_pred)?;
        let sum_abs: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).abs())
            .sum();
        Ok(sum_abs / y_true.len() as f64)
    }

    /// Calculate R² (coefficient of determination).
    ///
    /// R² = 1 - (SS_res / SS_tot)
    ///
    /// where:
    /// - SS_res = sum((y_true - y_pred)^2)  (residual sum of squares)
    /// - SS_tot = sum((y_true - mean(y_true))^2)  (total sum of squares)
    ///
    /// Values can be negative if the model is worse than predicting the mean.
    /// A constant target gives 1.0 for a perfect prediction and 0.0 otherwise.
    pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> Result<f64, PipelineError> {
        check_lengths(y_true, y_pred)?;
        let mean_true = y_true.iter().sum::<f64>() / y_true.len() as f64;

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_true).powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - ss_res / ss_tot)
    }

    /// Calculate all metrics at once.
    pub fn calculate_all(
        y_true: &[f64],
        y_pred: &[f64],
    ) -> Result<RegressionMetrics, PipelineError> {
        let mse = Self::mse(y_true, y_pred)?;
        Ok(RegressionMetrics::new(
            mse,
            Self::mae(y_true, y_pred)?,
            Self::r_squared(y_true, y_pred)?,
        ))
    }
}

/// Struct to hold all regression metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}

impl RegressionMetrics {
    pub fn new(mse: f64, mae: f64, r_squared: f64) -> Self {
        Self {
            mse,
            rmse: mse.sqrt(),
            mae,
            r_squared,
        }
    }
}

impl std::fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MSE={:.4} RMSE={:.4} MAE={:.4} R²={:.4}",
            self.mse, self.rmse, self.mae, self.r_squared
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_perfect() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Metrics::mse(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_error() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [2.0, 3.0, 4.0, 5.0];
        // Errors: [-1, -1, -1, -1], squared: [1, 1, 1, 1], mean: 1.0
        assert!((Metrics::mse(&y_true, &y_pred).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rmse_squares_before_averaging() {
        // Residuals [3, -3]: squaring first gives 3, averaging first would give 0.
        let y_true = [0.0, 0.0];
        let y_pred = [3.0, -3.0];
        assert!((Metrics::rmse(&y_true, &y_pred).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mae() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [2.0, 1.0, 4.0, 3.0];
        assert!((Metrics::mae(&y_true, &y_pred).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        assert!((Metrics::r_squared(&y_true, &y_true).unwrap() - 1.0).abs() < 1e-12);

        // Predicting the mean gives 0.
        let mean = [2.5; 4];
        assert!(Metrics::r_squared(&y_true, &mean).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target() {
        let y_true = [2.0; 4];
        assert_eq!(Metrics::r_squared(&y_true, &y_true).unwrap(), 1.0);
        assert_eq!(Metrics::r_squared(&y_true, &[1.0; 4]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_and_empty() {
        assert!(matches!(
            Metrics::mse(&[1.0, 2.0], &[1.0]),
            Err(PipelineError::LengthMismatch {
                expected: 2,
                got: 1
            })
        ));
        assert!(matches!(
            Metrics::mae(&[], &[]),
            Err(PipelineError::EmptyData(_))
        ));
    }

    #[test]
    fn test_calculate_all() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [2.0, 3.0, 4.0, 5.0];
        let metrics = Metrics::calculate_all(&y_true, &y_pred).unwrap();
        assert!((metrics.mse - 1.0).abs() < 1e-12);
        assert!((metrics.rmse - 1.0).abs() < 1e-12);
        assert!((metrics.mae - 1.0).abs() < 1e-12);
        assert!(metrics.to_string().starts_with("MSE=1.0000"));
    }
}
