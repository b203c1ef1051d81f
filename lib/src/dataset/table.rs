use super::columns;
use super::record::RawRecord;
use crate::error::PipelineError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Untyped table of raw listings: a header row and string cells.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Key a header is matched on: trimmed and lower-cased.
pub fn header_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl RawTable {
    /// Build a table from headers and rows.
    ///
    /// # Errors
    /// [`PipelineError::RaggedRow`] if a row's length differs from the header's.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, PipelineError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(PipelineError::RaggedRow {
                    row: i,
                    expected: headers.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Build a table from typed records.
    ///
    /// The `price` column is written only when every record has a price.
    pub fn from_records(records: &[RawRecord]) -> Self {
        let with_price = !records.is_empty() && records.iter().all(|r| r.price.is_some());

        let mut headers: Vec<String> = columns::REQUIRED.iter().map(|c| c.to_string()).collect();
        if with_price {
            headers.push("price".to_string());
        }

        let rows = records
            .iter()
            .map(|r| {
                let mut row = vec![
                    r.ram.clone(),
                    r.weight.clone(),
                    r.screenresolution.clone(),
                    r.cpu.clone(),
                    r.gpu.clone(),
                    r.memory.clone(),
                    r.opsys.clone(),
                    r.inches.to_string(),
                ];
                if let (true, Some(price)) = (with_price, r.price) {
                    row.push(price.to_string());
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Read a table from CSV. The first record is the header.
    ///
    /// Cells are trimmed; bytes that are not valid UTF-8 are replaced rather
    /// than rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PipelineError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.byte_records() {
            let record = result?;
            rows.push(
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .collect(),
            );
        }

        Self::new(headers, rows)
    }

    /// Read a table from a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Column names as given.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched on [`header_key`]. First match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = header_key(name);
        self.headers.iter().position(|h| header_key(h) == name)
    }

    /// Cells of one column, matched case-insensitively.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), PipelineError> {
        if row.len() != self.headers.len() {
            return Err(PipelineError::RaggedRow {
                row: self.rows.len(),
                expected: self.headers.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Add a column, or replace it if a column of that name already exists.
    pub fn with_column(
        mut self,
        name: &str,
        values: Vec<String>,
    ) -> Result<Self, PipelineError> {
        if values.len() != self.rows.len() {
            return Err(PipelineError::LengthMismatch {
                expected: self.rows.len(),
                got: values.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(self)
    }

    /// Drop a column if present.
    pub fn without_column(mut self, name: &str) -> Self {
        if let Some(idx) = self.column_index(name) {
            self.headers.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
        self
    }

    /// Split into `(head, tail)` where `head` holds the first
    /// `floor(len * train_ratio)` rows. Order is preserved.
    pub fn train_test_split(&self, train_ratio: f64) -> Result<(Self, Self), PipelineError> {
        if !(0.0..=1.0).contains(&train_ratio) {
            return Err(PipelineError::Config(format!(
                "train_ratio must be within [0, 1], got {}",
                train_ratio
            )));
        }
        let n_train = (self.rows.len() as f64 * train_ratio) as usize;
        let (head, tail) = self.rows.split_at(n_train);
        Ok((
            Self {
                headers: self.headers.clone(),
                rows: head.to_vec(),
            },
            Self {
                headers: self.headers.clone(),
                rows: tail.to_vec(),
            },
        ))
    }
}
