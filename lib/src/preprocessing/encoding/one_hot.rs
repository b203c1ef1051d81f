//! One-hot encoding for categorical features.
//!
//! Transforms string categories to one-hot (dummy) columns named
//! `<column><separator><category>`.

use crate::error::PipelineError;
use crate::preprocessing::traits::{check_columns, FittedTransformer, Transformer};
use crate::table::{CategoricalTable, FeatureTable};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Default separator between column name and category.
pub const DEFAULT_SEPARATOR: &str = "_";

/// One-hot encoder for categorical features.
///
/// Each input column is treated as a categorical feature, and the encoder
/// learns the sorted unique values (categories) present in each column during
/// fitting.
///
/// # Example
/// ```
/// use laptop_features::preprocessing::{FittedTransformer, OneHotEncoder, Transformer};
/// use laptop_features::table::CategoricalTable;
///
/// let mut data = CategoricalTable::new(3);
/// data.push_column("os", vec!["Windows".into(), "Mac".into(), "Windows".into()])?;
///
/// let fitted = OneHotEncoder::new().fit(&data)?;
/// assert_eq!(fitted.feature_names_out(), vec!["os_Mac", "os_Windows"]);
///
/// let encoded = fitted.transform(&data)?;
/// assert_eq!(encoded.to_rows(), vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]]);
/// # Ok::<(), laptop_features::error::PipelineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct OneHotEncoder {
    separator: String,
}

impl OneHotEncoder {
    /// Create a new OneHotEncoder with default settings.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set the separator placed between column name and category.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_categories(values: &[String]) -> Vec<String> {
    values
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

fn output_name(column: &str, separator: &str, category: &str) -> String {
    format!("{column}{separator}{category}")
}

/// Expand every column of `data` over the categories it contains itself.
///
/// Blocks follow column order; within a block categories are sorted.
pub fn expand(data: &CategoricalTable, separator: &str) -> Result<FeatureTable, PipelineError> {
    let blocks: Vec<(&str, &[String], Vec<String>)> = data
        .iter()
        .map(|(name, values)| (name, values, sorted_categories(values)))
        .collect();

    let width: usize = blocks.iter().map(|(_, _, cats)| cats.len()).sum();
    let mut values = Array2::zeros((data.n_rows(), width));
    let mut names = Vec::with_capacity(width);

    let mut offset = 0;
    for (name, cells, categories) in &blocks {
        for (row, cell) in cells.iter().enumerate() {
            if let Ok(k) = categories.binary_search(cell) {
                values[[row, offset + k]] = 1.0;
            }
        }
        names.extend(
            categories
                .iter()
                .map(|cat| output_name(name, separator, cat)),
        );
        offset += categories.len();
    }

    FeatureTable::new(names, values)
}

impl Transformer for OneHotEncoder {
    type Input = CategoricalTable;
    type Output = FeatureTable;
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &CategoricalTable) -> Result<FittedOneHotEncoder, PipelineError> {
        if data.n_rows() == 0 {
            return Err(PipelineError::EmptyData(
                "Cannot fit OneHotEncoder on empty data".to_string(),
            ));
        }

        let categories = data
            .iter()
            .map(|(_, values)| sorted_categories(values))
            .collect();

        Ok(FittedOneHotEncoder {
            columns: data.columns().to_vec(),
            categories,
            separator: self.separator.clone(),
        })
    }
}

/// Fitted OneHotEncoder ready for inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedOneHotEncoder {
    columns: Vec<String>,
    /// Sorted categories for each input column.
    categories: Vec<Vec<String>>,
    separator: String,
}

impl FittedOneHotEncoder {
    /// Get the categories learned for each feature.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    /// Get the number of output features.
    pub fn n_features_out(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = CategoricalTable;
    type Output = FeatureTable;

    /// Expand with the categories present in `data`, then reindex to the
    /// fitted output columns. Categories seen at fit but absent now become
    /// all-zero columns; categories not seen at fit are dropped.
    fn transform(&self, data: &CategoricalTable) -> Result<FeatureTable, PipelineError> {
        check_columns(&self.columns, data.columns())?;

        let observed = expand(data, &self.separator)?;
        let fitted = self.feature_names_out();

        let unseen: Vec<&String> = observed
            .columns()
            .iter()
            .filter(|c| !fitted.contains(c))
            .collect();
        if !unseen.is_empty() {
            debug!(dropped = ?unseen, "categories not seen at fit are dropped");
        }

        Ok(observed.align_to(&fitted))
    }

    fn feature_names_in(&self) -> &[String] {
        &self.columns
    }

    fn feature_names_out(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(&self.categories)
            .flat_map(|(column, cats)| {
                cats.iter()
                    .map(move |cat| output_name(column, &self.separator, cat))
            })
            .collect()
    }
}
