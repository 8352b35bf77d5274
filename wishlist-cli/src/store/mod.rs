//! Remote tabular store boundary
//!
//! The wishlist logic only ever talks to a [`TabularStore`]: a worksheet-like
//! collaborator that can read every data row as header-keyed records, append a
//! row, overwrite a single cell and delete a row. Rows and columns are 1-based,
//! matching spreadsheet numbering.

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
pub mod memory;

/// One data row read from the store, keyed by header text.
///
/// Pairs keep the sheet's column order so that "the first header matching X"
/// is well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: Vec<(String, String)>,
}

impl RawRecord {
    /// Value under an exact header, first occurrence wins
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h.as_str() == header)
            .map(|(_, v)| v.as_str())
    }

    /// First cell whose header satisfies `pred`
    pub fn find_by_header(&self, mut pred: impl FnMut(&str) -> bool) -> Option<(&str, &str)> {
        self.cells
            .iter()
            .find(|(h, _)| pred(h.as_str()))
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

/// Hand-built records for tests
#[cfg(test)]
impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.push((header.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

impl<H: Into<String>, V: Into<String>> FromIterator<(H, V)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (H, V)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(|(h, v)| (h.into(), v.into())).collect(),
        }
    }
}

/// Row-level access to a remote worksheet
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Every data row below the header, as header-keyed records
    async fn read_all_records(&self) -> Result<Vec<RawRecord>>;

    /// Append one row after the last non-empty row
    async fn append_row(&self, values: &[String]) -> Result<()>;

    /// Overwrite a single cell (1-based row and column)
    async fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()>;

    /// Remove a row (1-based); later rows shift up by one
    async fn delete_row(&self, row: usize) -> Result<()>;
}
