//! `delete`

use anyhow::{Result, bail};

use super::{load_table, resolve_index};
use crate::cli::DeleteArgs;
use crate::report::Reporter;
use crate::store::TabularStore;
use crate::wishlist::delete;

pub async fn handle_delete(
    store: &dyn TabularStore,
    args: DeleteArgs,
    reporter: &dyn Reporter,
) -> Result<()> {
    // Load current rows
    let table = load_table(store).await?;
    let index = resolve_index(&table, args.number)?;
    let gift = table
        .get(index)
        .map(|item| item.gift.clone())
        .unwrap_or_default();

    // Delete row
    if !delete(store, index, reporter).await {
        bail!("Item #{} was not deleted", args.number);
    }
    reporter.success(&format!("Deleted item #{} ('{}')", args.number, gift));
    Ok(())
}
