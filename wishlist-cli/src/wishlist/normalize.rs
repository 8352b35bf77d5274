//! Loading the wishlist from the store
//!
//! Each load rebuilds the table from scratch. A store with no data records is
//! treated as an uninitialized sheet and gets the canonical header appended.

use anyhow::{Context, Result, bail};
use log::{debug, error, info};

use crate::report::Reporter;
use crate::store::TabularStore;

use super::codec::item_from_record;
use super::item::{WishlistTable, canonical_headers};

/// What a load produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were read and normalized
    Loaded(WishlistTable),
    /// The store had no records; the header row was just written
    Initialized,
    /// A remote call failed
    Failed(String),
}

impl LoadOutcome {
    /// Table view of the outcome; failures and fresh sheets are empty
    pub fn into_table(self) -> WishlistTable {
        match self {
            LoadOutcome::Loaded(table) => table,
            LoadOutcome::Initialized | LoadOutcome::Failed(_) => WishlistTable::empty(),
        }
    }

    /// Table for `Loaded` and `Initialized`, an error for `Failed`
    pub fn into_result(self) -> Result<WishlistTable> {
        match self {
            LoadOutcome::Failed(message) => bail!("Error loading wishlist: {}", message),
            outcome => Ok(outcome.into_table()),
        }
    }
}

async fn try_load(store: &dyn TabularStore) -> Result<LoadOutcome> {
    let records = store
        .read_all_records()
        .await
        .context("Failed to read wishlist rows")?;

    if records.is_empty() {
        info!("Sheet has no records, writing header row");
        store
            .append_row(&canonical_headers())
            .await
            .context("Failed to write header row")?;
        return Ok(LoadOutcome::Initialized);
    }

    let items = records.iter().map(item_from_record).collect::<Vec<_>>();
    debug!("Normalized {} wishlist rows", items.len());
    Ok(LoadOutcome::Loaded(WishlistTable::new(items)))
}

/// Load the wishlist, telling apart a fresh sheet from a failed read
pub async fn load_outcome(store: &dyn TabularStore) -> LoadOutcome {
    match try_load(store).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Wishlist load failed: {:#}", e);
            LoadOutcome::Failed(format!("{:#}", e))
        }
    }
}

/// Load the wishlist; failures are reported and yield an empty table
pub async fn load(store: &dyn TabularStore, reporter: &dyn Reporter) -> WishlistTable {
    match load_outcome(store).await.into_result() {
        Ok(table) => table,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            WishlistTable::empty()
        }
    }
}
