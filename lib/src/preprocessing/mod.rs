//! Data preprocessing transformers.
//!
//! Transformers follow a fit/transform split: an unfitted transformer holds
//! hyperparameters, [`Transformer::fit`] learns from a table and returns a
//! fitted value that only transforms.
//!
//! # Core Traits
//!
//! - [`Transformer`]: Unfitted transformer with hyperparameters
//! - [`FittedTransformer`]: Fitted transformer ready for inference
//!
//! # Available Transformers
//!
//! ## Scaling
//! - [`StandardScaler`]: Z-score normalization over a [`FeatureTable`](crate::table::FeatureTable)
//!
//! ## Encoding
//! - [`OneHotEncoder`]: One-hot expansion of a [`CategoricalTable`](crate::table::CategoricalTable)
//!
//! # Example
//!
//! ```
//! use laptop_features::preprocessing::{FittedStandardScaler, FittedTransformer, StandardScaler, Transformer};
//! use laptop_features::serialization::SerializableParams;
//! use laptop_features::table::FeatureTable;
//! use ndarray::array;
//!
//! let training = FeatureTable::new(vec!["weight_kg".into()], array![[1.2], [2.0], [2.8]])?;
//! let fitted = StandardScaler::new().fit(&training)?;
//!
//! // Save for later use, then load and transform new data
//! let path = std::env::temp_dir().join("laptop_features_doc_scaler.bin");
//! fitted.save_to_file(&path)?;
//! let loaded = FittedStandardScaler::load_from_file(&path)?;
//! assert_eq!(loaded.transform(&training)?, fitted.transform(&training)?);
//! # std::fs::remove_file(&path).ok();
//! # Ok::<(), laptop_features::error::PipelineError>(())
//! ```

pub mod encoding;
pub mod scaling;
pub mod traits;

pub use encoding::{FittedOneHotEncoder, OneHotEncoder};
pub use scaling::{FittedStandardScaler, StandardScaler};
pub use traits::{FittedTransformer, Transformer};
