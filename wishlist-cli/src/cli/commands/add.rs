//! `add`

use anyhow::{Result, bail};

use crate::cli::AddArgs;
use crate::report::Reporter;
use crate::store::TabularStore;
use crate::wishlist::{add, prepare, validate};

pub async fn handle_add(
    store: &dyn TabularStore,
    args: AddArgs,
    reporter: &dyn Reporter,
) -> Result<()> {
    // Validate before touching the sheet
    let (valid, message) = validate(&args.gift);
    if !valid {
        bail!(message);
    }

    let item = prepare(
        &args.gift,
        &args.category,
        &args.description,
        &args.link,
        args.selected,
    );

    // Append row
    if !add(store, &item, reporter).await {
        bail!("'{}' was not added", item.gift);
    }
    reporter.success(&format!("Added '{}' to the wishlist", item.gift));
    Ok(())
}
