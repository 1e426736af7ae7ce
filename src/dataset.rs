//! Tabular input: named columns of optional values.
//!
//! A [`Dataset`] is what a front end hands to the tester. Column names are
//! unique; columns may differ in length and may contain missing entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A named column of possibly-missing numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColumn")]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    /// Create a column from optional values.
    ///
    /// Non-finite numbers (`NaN`, `±inf`) are stored as missing.
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect(),
        }
    }

    /// Create a column with no missing entries (apart from non-finite values).
    pub fn from_values(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, values.into_iter().map(Some))
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw entries, `None` for missing.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of entries including missing ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the column has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if every entry is missing (or there are none).
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// The non-missing values in their original order.
    pub fn sample(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}

/// An ordered set of uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<Column>,
}

// Deserialized shapes; converted through the checking constructors.

#[derive(Deserialize)]
struct RawColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl From<RawColumn> for Column {
    fn from(raw: RawColumn) -> Self {
        Column::new(raw.name, raw.values)
    }
}

#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<Column>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        Dataset::new(raw.columns)
    }
}

impl Dataset {
    /// Build a dataset, rejecting duplicate column names.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        check_unique(columns.iter().map(Column::name))?;
        Ok(Self { columns })
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateColumn`] if the name is taken.
    pub fn push(&mut self, column: Column) -> Result<(), DatasetError> {
        if self.column(column.name()).is_some() {
            return Err(DatasetError::DuplicateColumn(column.name().to_string()));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_column(mut self, column: Column) -> Result<Self, DatasetError> {
        self.push(column)?;
        Ok(self)
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of unordered column pairs, `n(n-1)/2`.
    pub fn pair_count(&self) -> usize {
        let n = self.columns.len();
        n * n.saturating_sub(1) / 2
    }

    /// Remove columns whose entries are all missing.
    ///
    /// Front ends call this before running comparisons; the tester itself
    /// assumes every column could hold data.
    pub fn drop_empty_columns(&mut self) {
        self.columns.retain(|c| !c.is_all_missing());
    }

    /// Consuming form of [`drop_empty_columns`](Self::drop_empty_columns).
    pub fn without_empty_columns(mut self) -> Self {
        self.drop_empty_columns();
        self
    }

    /// Rename every column at once, positionally.
    ///
    /// # Errors
    ///
    /// Fails without modifying the dataset if the number of names differs
    /// from the number of columns or the new names are not unique.
    pub fn rename_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), DatasetError> {
        if names.len() != self.columns.len() {
            return Err(DatasetError::RenameLength {
                expected: self.columns.len(),
                got: names.len(),
            });
        }
        check_unique(names.iter().map(|n| n.as_ref()))?;

        for (column, name) in self.columns.iter_mut().zip(names) {
            column.name = name.as_ref().to_string();
        }
        Ok(())
    }

    /// The six-sample demonstration dataset, one missing entry in `Sample1`.
    pub fn demo() -> Self {
        let ints = |v: [i32; 7]| v.into_iter().map(|x| Some(f64::from(x)));
        Self {
            columns: vec![
                Column::new(
                    "Sample1",
                    [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), None, Some(7.0)],
                ),
                Column::new("Sample2", ints([2, 3, 4, 5, 6, 7, 8])),
                Column::new("Sample3", ints([5, 6, 7, 8, 9, 10, 11])),
                Column::new("Sample4", ints([1, 1, 2, 2, 3, 3, 4])),
                Column::new("Sample5", ints([10, 11, 12, 13, 14, 15, 16])),
                Column::new("Sample6", ints([3, 4, 5, 6, 7, 8, 9])),
            ],
        }
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(DatasetError::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}
