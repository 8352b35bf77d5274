//! `edit`

use anyhow::{Result, bail};

use super::{load_table, resolve_index};
use crate::cli::EditArgs;
use crate::report::Reporter;
use crate::store::TabularStore;
use crate::wishlist::{WishlistItem, prepare, update, validate};

/// Apply the given changes on top of the current item
fn merge(current: &WishlistItem, args: &EditArgs) -> WishlistItem {
    let pick = |new: &Option<String>, old: &str| new.clone().unwrap_or_else(|| old.to_string());

    prepare(
        &pick(&args.gift, &current.gift),
        &pick(&args.category, &current.category),
        &pick(&args.description, &current.description),
        &pick(&args.link, &current.link),
        args.selected.unwrap_or(current.selected),
    )
}

pub async fn handle_edit(
    store: &dyn TabularStore,
    args: EditArgs,
    reporter: &dyn Reporter,
) -> Result<()> {
    // Load current rows
    let table = load_table(store).await?;
    let index = resolve_index(&table, args.number)?;
    let Some(current) = table.get(index) else {
        bail!("No item #{}", args.number);
    };

    // Validate merged item
    let item = merge(current, &args);
    let (valid, message) = validate(&item.gift);
    if !valid {
        bail!(message);
    }

    // Write cells
    if !update(store, index, &item, reporter).await {
        bail!("Item #{} was not updated", args.number);
    }
    reporter.success(&format!("Updated item #{} ('{}')", args.number, item.gift));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use crate::store::memory::{MemoryStore, StoreCall};

    const HEADER: &[&str] = &["Выбрано", "Подарок", "Категория", "Описание", "Ссылка"];

    fn store() -> MemoryStore {
        MemoryStore::with_rows(
            HEADER,
            &[
                &["", "Book", "Reading", "", ""],
                &["TRUE", "Lamp", "Home", "Desk lamp", "https://example.com/lamp"],
            ],
        )
    }

    fn args(number: usize) -> EditArgs {
        EditArgs {
            number,
            gift: None,
            category: None,
            description: None,
            link: None,
            selected: None,
        }
    }

    #[tokio::test]
    async fn test_edit_keeps_unspecified_fields_and_selected() {
        let store = store();
        let reporter = RecordingReporter::new();
        let mut edit = args(2);
        edit.description = Some("  LED desk lamp ".into());

        handle_edit(&store, edit, &reporter).await.unwrap();

        assert_eq!(
            store.rows()[2],
            vec!["TRUE", "Lamp", "Home", "LED desk lamp", "https://example.com/lamp"]
        );
    }

    #[tokio::test]
    async fn test_edit_can_clear_selected() {
        let store = store();
        let reporter = RecordingReporter::new();
        let mut edit = args(2);
        edit.selected = Some(false);

        handle_edit(&store, edit, &reporter).await.unwrap();
        assert_eq!(store.rows()[2][0], "");
    }

    #[tokio::test]
    async fn test_edit_rejects_blank_gift_before_writing() {
        let store = store();
        let reporter = RecordingReporter::new();
        let mut edit = args(1);
        edit.gift = Some("   ".into());

        let err = handle_edit(&store, edit, &reporter).await.unwrap_err();

        assert_eq!(err.to_string(), "gift name required");
        assert_eq!(store.calls(), vec![StoreCall::ReadAll]);
    }

    #[tokio::test]
    async fn test_edit_out_of_range() {
        let store = store();
        let reporter = RecordingReporter::new();

        let err = handle_edit(&store, args(3), &reporter).await.unwrap_err();
        assert_eq!(err.to_string(), "No item #3 (valid numbers are 1 to 2)");
        assert!(handle_edit(&store, args(0), &reporter).await.is_err());

        assert!(store.mutations().is_empty());
        assert_eq!(reporter.error_count(), 0);
    }
}
