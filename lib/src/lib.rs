//! # laptop-features
//!
//! Turns raw laptop listings into a fixed-width numeric feature table for
//! price regression, with a strict separation between learning the feature
//! contract (fit) and applying it (transform).
//!
//! ## Core Design Principles
//!
//! - **Pure fit**: [`FeaturePipeline::fit`] returns a fresh, immutable
//!   [`FittedState`] plus the transformed training table. Nothing is cached
//!   behind the caller's back.
//! - **Stable contract**: every [`transform`] yields exactly
//!   `state.fitted_columns()`, in order, whatever categories the new table holds.
//! - **Declarative features**: derived columns come from
//!   [`features::FEATURE_SCHEMA`]; classifiers are ordered rule tables in
//!   [`parsing`].
//!
//! ## Quick Start
//!
//! ```rust
//! use laptop_features::dataset::{RawRecord, RawTable};
//! use laptop_features::{FeaturePipeline, PipelineConfig};
//!
//! let listing = |ram: &str, cpu: &str, opsys: &str, price: f64| RawRecord {
//!     ram: ram.into(),
//!     weight: "1.8kg".into(),
//!     screenresolution: "Full HD 1920x1080".into(),
//!     cpu: cpu.into(),
//!     gpu: "Intel HD Graphics 620".into(),
//!     memory: "256GB SSD".into(),
//!     opsys: opsys.into(),
//!     inches: 15.6,
//!     price: Some(price),
//! };
//! let train = RawTable::from_records(&[
//!     listing("8GB", "Intel Core i5 7200U 2.5GHz", "Windows 10", 750.0),
//!     listing("16GB", "Intel Core i7 8550U 1.8GHz", "Linux", 1150.0),
//! ]);
//!
//! let (state, features) = FeaturePipeline::new(PipelineConfig::default()).fit(&train)?;
//! assert_eq!(features.columns(), state.fitted_columns());
//!
//! let new = RawTable::from_records(&[
//!     listing("8GB", "AMD Ryzen 5 2500U", "Chrome OS", 0.0).without_price(),
//! ]);
//! let applied = state.transform(&new)?;
//! assert_eq!(applied.columns(), state.fitted_columns());
//! # Ok::<(), laptop_features::PipelineError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: Raw listings: [`RawTable`](dataset::RawTable) (CSV or in-memory) and [`RawRecord`](dataset::RawRecord)
//! - `parsing`: Stateless field parsers and rule-based classifiers
//! - `features`: Declarative feature schema and the assembler
//! - `preprocessing`: Standard scaling and one-hot encoding transformers
//! - `pipeline`: Fit/transform orchestration and the thread-safe [`SharedPipeline`]
//! - `state`: The frozen [`FittedState`]
//! - `metrics`: Regression metrics for models trained on the output
//! - `serialization`: Byte-level persistence of fitted parameters

/// Pipeline configuration.
pub mod config;

/// Raw listing tables and records.
pub mod dataset;

/// Error types.
pub mod error;

/// Feature schema and assembly.
pub mod features;

/// Regression evaluation metrics.
pub mod metrics;

/// Field parsers.
pub mod parsing;

/// Fit/transform orchestration.
pub mod pipeline;

/// Data preprocessing transformers.
pub mod preprocessing;

/// Persistence of fitted parameters.
pub mod serialization;

/// The fitted state.
pub mod state;

/// Named numeric and categorical tables.
pub mod table;

pub use config::PipelineConfig;
pub use error::{ParseError, PipelineError};
pub use pipeline::{fit, transform, FeaturePipeline, SharedPipeline};
pub use serialization::SerializableParams;
pub use state::FittedState;
pub use table::FeatureTable;
