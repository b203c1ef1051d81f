//! Feature assembly: raw table in, typed feature columns out.
//!
//! [`assemble`] is pure orchestration. It validates the table's columns,
//! extracts one [`RawRecord`] per row, runs the field parsers through
//! [`DerivedFeatures::from_record`] and materializes the columns listed in
//! [`FEATURE_SCHEMA`]. Configured passthrough columns are carried as raw
//! strings; the pipeline decides their kind. Nothing here depends on a fitted
//! state, so fit and apply mode assemble identically.

mod derived;
mod schema;

pub use self::derived::DerivedFeatures;
pub use self::schema::{feature, Accessor, FeatureKind, FeatureSpec, FEATURE_SCHEMA};

use crate::config::PipelineConfig;
use crate::dataset::{columns, header_key, RawRecord, RawTable};
use crate::error::{ParseError, PipelineError};
use crate::parsing::parse_inches;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Values of one assembled column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValues {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
    /// Passthrough cells, kind not yet decided.
    Raw(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Categorical(v) | ColumnValues::Raw(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameColumn {
    pub name: String,
    pub values: ColumnValues,
}

/// Assembled feature columns: schema columns in schema order, then
/// passthrough columns in configuration order.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureFrame {
    pub columns: Vec<FrameColumn>,
    pub target: Option<Vec<f64>>,
    pub n_rows: usize,
}

impl FeatureFrame {
    pub fn column(&self, name: &str) -> Option<&ColumnValues> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.values)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Lower-cased header name to its first position.
fn header_index(table: &RawTable) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, header) in table.headers().iter().enumerate() {
        index.entry(header_key(header)).or_insert(i);
    }
    index
}

fn require(index: &HashMap<String, usize>, column: &str) -> Result<usize, PipelineError> {
    index
        .get(column)
        .copied()
        .ok_or_else(|| PipelineError::missing_column(column))
}

fn check_passthrough(config: &PipelineConfig) -> Result<(), PipelineError> {
    let mut seen = HashSet::new();
    for column in &config.passthrough_columns {
        if feature(column).is_some() {
            return Err(PipelineError::Config(format!(
                "passthrough column '{}' collides with a derived feature",
                column
            )));
        }
        if !seen.insert(column.as_str()) {
            return Err(PipelineError::Config(format!(
                "passthrough column '{}' is listed twice",
                column
            )));
        }
    }
    Ok(())
}

/// Positions of the raw columns a single row is read from.
struct RawLayout {
    required: [usize; 8],
    passthrough: Vec<usize>,
    target: Option<usize>,
}

impl RawLayout {
    fn resolve(
        table: &RawTable,
        config: &PipelineConfig,
        require_target: bool,
    ) -> Result<Self, PipelineError> {
        let index = header_index(table);

        let mut required = [0usize; 8];
        for (slot, column) in required.iter_mut().zip(columns::REQUIRED) {
            *slot = require(&index, column)?;
        }

        let passthrough = config
            .passthrough_columns
            .iter()
            .map(|c| require(&index, c))
            .collect::<Result<Vec<_>, _>>()?;

        let target = if require_target {
            Some(require(&index, &config.target_column)?)
        } else {
            index.get(&config.target_column).copied()
        };

        Ok(Self {
            required,
            passthrough,
            target,
        })
    }

    fn record(&self, row: &[String]) -> Result<RawRecord, ParseError> {
        let cell = |i: usize| row[self.required[i]].clone();
        Ok(RawRecord {
            ram: cell(0),
            weight: cell(1),
            screenresolution: cell(2),
            cpu: cell(3),
            gpu: cell(4),
            memory: cell(5),
            opsys: cell(6),
            inches: parse_inches(&row[self.required[7]])?,
            price: None,
        })
    }
}

fn parse_target(column: &str, raw: &str) -> Result<f64, ParseError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::new(column, raw, "expected a finite number")),
    }
}

/// Read the target column at `idx`.
///
/// With `strict` set the first malformed cell is an error. Otherwise the
/// target is optional: a malformed cell drops it for the whole table.
fn extract_target(
    table: &RawTable,
    column: &str,
    idx: usize,
    strict: bool,
) -> Result<Option<Vec<f64>>, PipelineError> {
    let mut values = Vec::with_capacity(table.len());
    for (row_idx, row) in table.rows().iter().enumerate() {
        match parse_target(column, &row[idx]) {
            Ok(value) => values.push(value),
            Err(e) if strict => return Err(PipelineError::parse(row_idx, e)),
            Err(e) => {
                warn!(row = row_idx, error = %e, "optional target is malformed; ignoring it");
                return Ok(None);
            }
        }
    }
    Ok(Some(values))
}

/// Assemble the feature columns of `table`.
///
/// Every required raw column, every configured passthrough column and, when
/// `require_target` is set, the target column must be present; this is
/// checked before any cell is parsed. When `require_target` is not set a
/// target column that happens to be present is extracted only if every cell
/// parses; otherwise the frame has no target.
///
/// # Errors
/// - [`PipelineError::MissingColumn`] for an absent column.
/// - [`PipelineError::Config`] for a passthrough column that shadows a derived feature.
/// - [`PipelineError::Parse`] for the first malformed feature cell, with its
///   row, or a malformed target cell when `require_target` is set.
pub fn assemble(
    table: &RawTable,
    config: &PipelineConfig,
    require_target: bool,
) -> Result<FeatureFrame, PipelineError> {
    check_passthrough(config)?;
    let layout = RawLayout::resolve(table, config, require_target)?;

    let n_rows = table.len();
    let mut derived = Vec::with_capacity(n_rows);

    for (row_idx, row) in table.rows().iter().enumerate() {
        let record = layout
            .record(row)
            .map_err(|e| PipelineError::parse(row_idx, e))?;
        let features =
            DerivedFeatures::from_record(&record).map_err(|e| PipelineError::parse(row_idx, e))?;

        if features.storage().is_empty() {
            warn!(
                row = row_idx,
                memory = %record.memory,
                "no storage kind recognized; ssd, hdd and flash_storage default to 0"
            );
        }

        derived.push(features);
    }

    let target = match layout.target {
        Some(idx) => extract_target(table, &config.target_column, idx, require_target)?,
        None => None,
    };

    let mut frame_columns: Vec<FrameColumn> = FEATURE_SCHEMA
        .iter()
        .map(|spec| FrameColumn {
            name: spec.name.to_string(),
            values: match spec.accessor {
                Accessor::Numeric(get) => ColumnValues::Numeric(derived.iter().map(get).collect()),
                Accessor::Categorical(get) => ColumnValues::Categorical(
                    derived.iter().map(|f| get(f).to_string()).collect(),
                ),
            },
        })
        .collect();

    for (name, &idx) in config.passthrough_columns.iter().zip(&layout.passthrough) {
        frame_columns.push(FrameColumn {
            name: name.clone(),
            values: ColumnValues::Raw(table.rows().iter().map(|row| row[idx].clone()).collect()),
        });
    }

    debug!(
        rows = n_rows,
        columns = frame_columns.len(),
        has_target = target.is_some(),
        "assembled feature frame"
    );

    Ok(FeatureFrame {
        columns: frame_columns,
        target,
        n_rows,
    })
}
