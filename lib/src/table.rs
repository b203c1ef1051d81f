//! Named column tables passed between preprocessing steps.

use crate::error::PipelineError;
use ndarray::{concatenate, Array1, Array2, ArrayView1, Axis};
use std::collections::HashMap;

/// Numeric feature table: named columns over a dense `rows × columns` matrix,
/// plus an optional target vector kept apart from the features.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    values: Array2<f64>,
    target: Option<Array1<f64>>,
}

impl FeatureTable {
    /// Create a table. `values` must have one column per name.
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> Result<Self, PipelineError> {
        if values.ncols() != columns.len() {
            return Err(PipelineError::LengthMismatch {
                expected: columns.len(),
                got: values.ncols(),
            });
        }
        Ok(Self {
            columns,
            values,
            target: None,
        })
    }

    /// A table with `n_rows` rows and no columns.
    pub fn empty(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            values: Array2::zeros((n_rows, 0)),
            target: None,
        }
    }

    /// Attach a target vector with one entry per row.
    pub fn with_target(mut self, target: Array1<f64>) -> Result<Self, PipelineError> {
        if target.len() != self.n_rows() {
            return Err(PipelineError::LengthMismatch {
                expected: self.n_rows(),
                got: target.len(),
            });
        }
        self.target = Some(target);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn target(&self) -> Option<&Array1<f64>> {
        self.target.as_ref()
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// View of one column by name.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(name).map(|i| self.values.column(i))
    }

    /// Place `other`'s columns to the right of this table's.
    ///
    /// The target, if any, is taken from `self`.
    pub fn hstack(&self, other: &FeatureTable) -> Result<FeatureTable, PipelineError> {
        if self.n_rows() != other.n_rows() {
            return Err(PipelineError::LengthMismatch {
                expected: self.n_rows(),
                got: other.n_rows(),
            });
        }
        let values = concatenate(Axis(1), &[self.values.view(), other.values.view()])?;
        let mut columns = self.columns.clone();
        columns.extend(other.columns.iter().cloned());
        Ok(FeatureTable {
            columns,
            values,
            target: self.target.clone(),
        })
    }

    /// Reindex to exactly `columns`, in that order.
    ///
    /// Columns missing from this table become all-zero; columns not listed
    /// are dropped. The target is carried over unchanged.
    pub fn align_to(&self, columns: &[String]) -> FeatureTable {
        let index: HashMap<&str, usize> = self
            .columns
            .iter()
            .enumerate()
            .rev()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut values = Array2::zeros((self.n_rows(), columns.len()));
        for (j, name) in columns.iter().enumerate() {
            if let Some(&i) = index.get(name.as_str()) {
                values.column_mut(j).assign(&self.values.column(i));
            }
        }

        FeatureTable {
            columns: columns.to_vec(),
            values,
            target: self.target.clone(),
        }
    }

    /// Rows as plain vectors, in column order.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn into_parts(self) -> (Vec<String>, Array2<f64>, Option<Array1<f64>>) {
        (self.columns, self.values, self.target)
    }
}

/// String-valued columns awaiting one-hot expansion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoricalTable {
    columns: Vec<String>,
    values: Vec<Vec<String>>,
    n_rows: usize,
}

impl CategoricalTable {
    /// An empty table with `n_rows` rows.
    pub fn new(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
            n_rows,
        }
    }

    /// Append a column. It must have one value per row.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), PipelineError> {
        if values.len() != self.n_rows {
            return Err(PipelineError::LengthMismatch {
                expected: self.n_rows,
                got: values.len(),
            });
        }
        self.columns.push(name.into());
        self.values.push(values);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Values of the `i`-th column.
    pub fn column_values(&self, i: usize) -> &[String] {
        &self.values[i]
    }

    /// `(name, values)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}
