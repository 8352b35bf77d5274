//! In-memory `TabularStore` used by tests
//!
//! Rows are stored as a plain grid (row 1 is whatever was appended first) and
//! read back through the same grid-to-records conversion the worksheet uses.
//! Every call is recorded so tests can assert exactly which rows and cells
//! were targeted, and faults can be injected per operation.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{RawRecord, TabularStore};
use crate::api::worksheet::records_from_values;

/// A recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ReadAll,
    Append(Vec<String>),
    WriteCell { row: usize, col: usize, value: String },
    DeleteRow(usize),
}

/// Which operations should fail
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub read: bool,
    pub append: bool,
    pub delete: bool,
    /// Fail the cell write with this 1-based position in the call sequence
    pub write_cell_at: Option<usize>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Vec<String>>,
    calls: Vec<StoreCall>,
    cell_writes: usize,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    faults: Faults,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a header row and data rows
    pub fn with_rows(header: &[&str], rows: &[&[&str]]) -> Self {
        let mut grid = vec![header.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
        for row in rows {
            grid.push(row.iter().map(|s| s.to_string()).collect());
        }
        Self {
            inner: Mutex::new(Inner {
                rows: grid,
                ..Inner::default()
            }),
            faults: Faults::default(),
        }
    }

    pub fn with_faults(mut self, faults: Faults) -> Self {
        self.faults = faults;
        self
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().rows.clone()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Calls other than reads
    pub fn mutations(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| *c != StoreCall::ReadAll)
            .collect()
    }
}

#[async_trait]
impl TabularStore for MemoryStore {
    async fn read_all_records(&self) -> Result<Vec<RawRecord>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::ReadAll);
        if self.faults.read {
            bail!("simulated read failure");
        }
        Ok(records_from_values(&inner.rows))
    }

    async fn append_row(&self, values: &[String]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::Append(values.to_vec()));
        if self.faults.append {
            bail!("simulated append failure");
        }
        inner.rows.push(values.to_vec());
        Ok(())
    }

    async fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::WriteCell {
            row,
            col,
            value: value.to_string(),
        });
        inner.cell_writes += 1;
        if self.faults.write_cell_at == Some(inner.cell_writes) {
            bail!("simulated write failure at cell {}", col);
        }
        if row == 0 || col == 0 {
            bail!("rows and columns are 1-based");
        }
        while inner.rows.len() < row {
            inner.rows.push(Vec::new());
        }
        let cells = &mut inner.rows[row - 1];
        if cells.len() < col {
            cells.resize(col, String::new());
        }
        cells[col - 1] = value.to_string();
        Ok(())
    }

    async fn delete_row(&self, row: usize) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::DeleteRow(row));
        if self.faults.delete {
            bail!("simulated delete failure");
        }
        if row == 0 || row > inner.rows.len() {
            bail!("row {} out of range", row);
        }
        inner.rows.remove(row - 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_match_worksheet_conversion() {
        let store = MemoryStore::with_rows(
            &["Выбрано", "Подарок", "Категория"],
            &[&["TRUE", "Book"], &["", "Lamp", "Home", "stray"]],
        );

        let records = store.read_all_records().await.unwrap();

        assert_eq!(records, records_from_values(&store.rows()));
        assert_eq!(records[0].get("Категория"), Some(""));
        assert_eq!(records[1].len(), 3);
    }

    #[tokio::test]
    async fn test_cell_write_below_data_grows_grid() {
        let store = MemoryStore::with_rows(&["Выбрано", "Подарок"], &[]);

        store.write_cell(3, 2, "Scarf").await.unwrap();

        let records = store.read_all_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Подарок"), Some(""));
        assert_eq!(records[1].get("Подарок"), Some("Scarf"));
    }
}
