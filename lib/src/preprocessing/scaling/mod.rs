//! Scaling transformers for feature normalization.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1), zero-variance columns emitted as 0.0 |

pub mod standard;

pub use standard::{column_moments, FittedStandardScaler, StandardScaler, DEGENERATE_STD_TOLERANCE};
