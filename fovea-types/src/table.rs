//! Timestamped table model consumed by every resampling operation.

use serde::{Deserialize, Serialize};

use crate::FoveaError;

/// Column names owned by the table itself and therefore not usable for value
/// columns. `start_timestamp` is reserved because event tables carry their
/// start timestamps on the primary axis.
pub const RESERVED_COLUMNS: [&str; 3] = ["timestamp", "time", "start_timestamp"];

/// Storage dtype of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dtype {
    /// 64-bit floating point. `NaN` is the missing-value marker.
    Float,
    /// 64-bit integer, also used for categorical/boolean codes.
    Int,
    /// UTF-8 text.
    Str,
}

impl Dtype {
    /// Canonical lower-case name, used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::Str => "str",
        }
    }
}

/// How a column may be resampled. The tag is fixed when the column is
/// constructed; resampling dispatches on it alone and never re-inspects
/// values at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpClass {
    /// Values measure a continuous quantity and may be blended between
    /// samples. Only valid on `Float` columns.
    Continuous,
    /// Values are codes or labels and may only be sampled, never blended.
    Discrete,
}

/// Typed column storage with typed missing-value markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    /// Floating-point values; `NaN` marks a missing value.
    Float(Vec<f64>),
    /// Integer values; `None` marks a missing value.
    Int(Vec<Option<i64>>),
    /// Text values; `None` marks a missing value.
    Str(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of rows stored.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// True when no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage dtype of this data.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self {
            Self::Float(_) => Dtype::Float,
            Self::Int(_) => Dtype::Int,
            Self::Str(_) => Dtype::Str,
        }
    }

    fn take_rows(&self, indices: &[usize]) -> Self {
        match self {
            Self::Float(v) => Self::Float(indices.iter().map(|&i| v[i]).collect()),
            Self::Int(v) => Self::Int(indices.iter().map(|&i| v[i]).collect()),
            Self::Str(v) => Self::Str(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

/// A named, typed value column tagged with its interpolation class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    class: InterpClass,
    data: ColumnData,
}

impl Column {
    /// Build a column, validating that the `Continuous` tag is only applied
    /// to float storage.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` when `class` is `Continuous`
    /// and `data` is not `Float`.
    pub fn new(
        name: impl Into<String>,
        class: InterpClass,
        data: ColumnData,
    ) -> Result<Self, FoveaError> {
        let name = name.into();
        if class == InterpClass::Continuous && data.dtype() != Dtype::Float {
            return Err(FoveaError::invalid_input(format!(
                "column `{name}` is {} but tagged continuous; only float columns can be blended",
                data.dtype().as_str()
            )));
        }
        Ok(Self { name, class, data })
    }

    /// Continuous float column.
    #[must_use]
    pub fn float(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            class: InterpClass::Continuous,
            data: ColumnData::Float(values),
        }
    }

    /// Discrete float column (e.g. a float-encoded category).
    #[must_use]
    pub fn float_discrete(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            class: InterpClass::Discrete,
            data: ColumnData::Float(values),
        }
    }

    /// Discrete integer column.
    #[must_use]
    pub fn int(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self {
            name: name.into(),
            class: InterpClass::Discrete,
            data: ColumnData::Int(values),
        }
    }

    /// Discrete text column.
    #[must_use]
    pub fn str(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            class: InterpClass::Discrete,
            data: ColumnData::Str(values),
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interpolation class tag.
    #[must_use]
    pub const fn class(&self) -> InterpClass {
        self.class
    }

    /// Storage dtype.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        self.data.dtype()
    }

    /// Stored values.
    #[must_use]
    pub const fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the column holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered table of rows tagged with nanosecond-resolution timestamps.
///
/// Invariants, enforced at construction and never repaired silently:
/// - the timestamp column is non-decreasing (violations are rejected, never
///   sorted);
/// - every value column has exactly one entry per timestamp;
/// - column names are unique and none of [`RESERVED_COLUMNS`].
///
/// The relative-time column (seconds since the first row) is derived as
/// `(ts - ts[0]) / 1e9` when the table is built and travels with the rows:
/// cropping preserves the stored values, while the resampling operations
/// build fresh tables and therefore recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesTable {
    timestamps: Vec<i64>,
    times: Vec<f64>,
    columns: Vec<Column>,
}

impl TimeSeriesTable {
    /// Build a table from absolute timestamps and value columns, deriving
    /// the relative-time column.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` when the timestamps are not
    /// monotonically non-decreasing, a column length disagrees with the
    /// timestamp count, or a column name is duplicated or reserved.
    pub fn new(timestamps: Vec<i64>, columns: Vec<Column>) -> Result<Self, FoveaError> {
        let times = match timestamps.first() {
            Some(&t0) => timestamps.iter().map(|&t| (t - t0) as f64 / 1e9).collect(),
            None => Vec::new(),
        };
        Self::with_times(timestamps, times, columns)
    }

    /// Build a table carrying explicit relative-time values instead of
    /// deriving them. Used by operations that must preserve the source's
    /// relative times (cropping).
    ///
    /// # Errors
    /// As [`TimeSeriesTable::new`], plus a length mismatch between
    /// `timestamps` and `times`.
    pub fn with_times(
        timestamps: Vec<i64>,
        times: Vec<f64>,
        columns: Vec<Column>,
    ) -> Result<Self, FoveaError> {
        if times.len() != timestamps.len() {
            return Err(FoveaError::invalid_input(format!(
                "relative-time column has {} rows, expected {}",
                times.len(),
                timestamps.len()
            )));
        }
        if timestamps.windows(2).any(|w| w[1] < w[0]) {
            return Err(FoveaError::invalid_input(
                "timestamps must be monotonically non-decreasing",
            ));
        }
        for (i, col) in columns.iter().enumerate() {
            if col.len() != timestamps.len() {
                return Err(FoveaError::invalid_input(format!(
                    "column `{}` has {} rows, expected {}",
                    col.name(),
                    col.len(),
                    timestamps.len()
                )));
            }
            if RESERVED_COLUMNS.contains(&col.name()) {
                return Err(FoveaError::invalid_input(format!(
                    "column name `{}` is reserved for the time axes",
                    col.name()
                )));
            }
            if columns[..i].iter().any(|c| c.name() == col.name()) {
                return Err(FoveaError::invalid_input(format!(
                    "duplicate column name `{}`",
                    col.name()
                )));
            }
        }
        Ok(Self {
            timestamps,
            times,
            columns,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Absolute timestamps in nanoseconds, non-decreasing.
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Relative times in seconds.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Value columns, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Consume the table, returning its value columns.
    #[must_use]
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Look up a value column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Names of the value columns, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// First timestamp, if any rows exist.
    #[must_use]
    pub fn first_ts(&self) -> Option<i64> {
        self.timestamps.first().copied()
    }

    /// Last timestamp, if any rows exist.
    #[must_use]
    pub fn last_ts(&self) -> Option<i64> {
        self.timestamps.last().copied()
    }

    /// Row subset by index, preserving stored relative times. Indices must
    /// be ascending for the result to uphold the timestamp invariant.
    #[must_use]
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        Self {
            timestamps: indices.iter().map(|&i| self.timestamps[i]).collect(),
            times: indices.iter().map(|&i| self.times[i]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    class: c.class,
                    data: c.data.take_rows(indices),
                })
                .collect(),
        }
    }

    /// Rename a value column in place.
    ///
    /// # Errors
    /// Returns `Err(FoveaError::InvalidInput)` when `from` does not exist,
    /// or `to` is reserved or already taken.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<(), FoveaError> {
        if RESERVED_COLUMNS.contains(&to) {
            return Err(FoveaError::invalid_input(format!(
                "column name `{to}` is reserved for the time axes"
            )));
        }
        if self.columns.iter().any(|c| c.name() == to) {
            return Err(FoveaError::invalid_input(format!(
                "duplicate column name `{to}`"
            )));
        }
        match self.columns.iter_mut().find(|c| c.name() == from) {
            Some(col) => {
                col.name = to.to_string();
                Ok(())
            }
            None => Err(FoveaError::invalid_input(format!("no column named `{from}`"))),
        }
    }
}
