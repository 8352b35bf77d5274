//! Row-level writes for wishlist items
//!
//! Items are addressed by their 0-based position in the most recently loaded
//! table; the remote row is that index plus [`HEADER_ROW_OFFSET`]. A delete
//! shifts every later row up, so indices from an older load must not be reused
//! afterwards.
//!
//! None of these functions return errors. Failures are reported and logged,
//! and the caller gets `false`.

use anyhow::{Context, Result};
use log::{error, info};

use crate::report::Reporter;
use crate::store::TabularStore;

use super::codec::item_to_row;
use super::item::{Column, HEADER_ROW_OFFSET, WishlistItem, row_number_for_index};

/// Message returned when the gift name is blank
pub const GIFT_REQUIRED: &str = "gift name required";

/// Check the required gift name before any write
pub fn validate(gift: &str) -> (bool, String) {
    if gift.trim().is_empty() {
        return (false, GIFT_REQUIRED.to_string());
    }
    (true, String::new())
}

/// Build an item from user input, trimming every text field
pub fn prepare(
    gift: &str,
    category: &str,
    description: &str,
    link: &str,
    selected: bool,
) -> WishlistItem {
    WishlistItem {
        selected,
        gift: gift.trim().to_string(),
        category: category.trim().to_string(),
        description: description.trim().to_string(),
        link: link.trim().to_string(),
    }
}

fn finish(result: Result<()>, reporter: &dyn Reporter, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to {}: {:#}", action, e);
            reporter.error(&format!("Failed to {}: {:#}", action, e));
            false
        }
    }
}

/// Append `item` as a new row at the end of the sheet
pub async fn add(store: &dyn TabularStore, item: &WishlistItem, reporter: &dyn Reporter) -> bool {
    let row = item_to_row(item);
    let result = store
        .append_row(&row)
        .await
        .context("append row rejected by store");

    if result.is_ok() {
        info!("Added wishlist item '{}'", item.gift);
    }
    finish(result, reporter, "add item")
}

async fn write_row_cells(store: &dyn TabularStore, row: usize, item: &WishlistItem) -> Result<()> {
    let values = item_to_row(item);
    for (column, value) in Column::ALL.iter().zip(&values) {
        store
            .write_cell(row, column.number(), value)
            .await
            .with_context(|| format!("writing row {} column {}", row, column.number()))?;
    }
    Ok(())
}

/// Overwrite the row for table `index` cell by cell
///
/// The five cells are written independently. A failure part way through
/// leaves the earlier cells updated.
pub async fn update(
    store: &dyn TabularStore,
    index: usize,
    item: &WishlistItem,
    reporter: &dyn Reporter,
) -> bool {
    let row = row_number_for_index(index);
    let result = write_row_cells(store, row, item).await;

    if result.is_ok() {
        info!("Updated wishlist row {} ('{}')", row, item.gift);
    }
    finish(result, reporter, "update item")
}

/// Delete the row for table `index`
pub async fn delete(store: &dyn TabularStore, index: usize, reporter: &dyn Reporter) -> bool {
    let row = row_number_for_index(index);
    let result = store
        .delete_row(row)
        .await
        .with_context(|| format!("deleting row {}", row));

    if result.is_ok() {
        info!(
            "Deleted wishlist row {} (rows below shifted up, offset {})",
            row, HEADER_ROW_OFFSET
        );
    }
    finish(result, reporter, "delete item")
}
