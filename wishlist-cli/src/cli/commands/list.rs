//! `list` and `categories`

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use super::load_table;
use crate::cli::{ListArgs, OutputFormat};
use crate::report::Reporter;
use crate::store::TabularStore;
use crate::wishlist::{WishlistItem, WishlistTable, categories, filter_by_category};

const UNTITLED: &str = "(untitled)";

/// A listed item with the number used by `edit` and `delete`
#[derive(Debug, Serialize)]
struct ListedItem<'a> {
    number: usize,
    #[serde(flatten)]
    item: &'a WishlistItem,
}

/// Items shown for `category`, numbered by their position in the full table
fn listed_items<'a>(table: &'a WishlistTable, category: Option<&str>) -> Vec<ListedItem<'a>> {
    filter_by_category(table, category)
        .into_iter()
        .map(|(index, item)| ListedItem {
            number: index + 1,
            item,
        })
        .collect()
}

/// Uncolored lines for one item
fn describe_item(number: usize, item: &WishlistItem) -> Vec<String> {
    let mark = if item.selected { "[x]" } else { "[ ]" };
    let gift = if item.gift.is_empty() {
        UNTITLED
    } else {
        item.gift.as_str()
    };

    let mut lines = vec![format!("{:>3}. {} {}", number, mark, gift)];
    if !item.category.is_empty() {
        lines.push(format!("       Category: {}", item.category));
    }
    if !item.description.is_empty() {
        lines.push(format!("       Description: {}", item.description));
    }
    if !item.link.is_empty() {
        lines.push(format!("       Link: {}", item.link));
    }
    lines
}

pub async fn handle_list(
    title: &str,
    url: &str,
    store: &dyn TabularStore,
    args: &ListArgs,
    reporter: &dyn Reporter,
) -> Result<()> {
    let table = load_table(store).await?;
    let listed = listed_items(&table, args.category.as_deref());

    if args.format == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&listed).context("Failed to serialize wishlist")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", title.bright_white().bold());
    println!("Spreadsheet: {}", url.cyan());
    println!();

    if table.is_empty() {
        reporter.info("The wishlist is empty. Add the first item with `wishlist-cli add <gift>`.");
        return Ok(());
    }
    if listed.is_empty() {
        reporter.info("No items in this category.");
        return Ok(());
    }

    for entry in &listed {
        let mut lines = describe_item(entry.number, entry.item).into_iter();
        // Selected items stand out in green
        if let Some(first) = lines.next() {
            if entry.item.selected {
                println!("{}", first.bright_green());
            } else {
                println!("{}", first.bold());
            }
        }
        for line in lines {
            println!("{}", line.dimmed());
        }
    }
    Ok(())
}

pub async fn handle_categories(store: &dyn TabularStore, reporter: &dyn Reporter) -> Result<()> {
    let table = load_table(store).await?;

    let names = categories(&table);
    if names.is_empty() {
        reporter.info("No categories yet.");
    }
    for name in names {
        if name.is_empty() {
            println!("{}", "(none)".dimmed());
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use crate::store::memory::{Faults, MemoryStore};

    const HEADER: &[&str] = &["Выбрано", "Подарок", "Категория", "Описание", "Ссылка"];

    fn store() -> MemoryStore {
        MemoryStore::with_rows(
            HEADER,
            &[
                &["", "Book", "Reading", "", ""],
                &["TRUE", "Lamp", "Home", "", ""],
                &["", "Kindle", "Reading", "", ""],
            ],
        )
    }

    fn list_args(category: Option<&str>) -> ListArgs {
        ListArgs {
            category: category.map(str::to_string),
            format: OutputFormat::Plain,
        }
    }

    #[test]
    fn test_describe_item_full() {
        let item = WishlistItem {
            selected: true,
            gift: "Book".into(),
            category: "Reading".into(),
            description: "Hardcover".into(),
            link: "https://example.com".into(),
        };
        assert_eq!(
            describe_item(1, &item),
            vec![
                "  1. [x] Book",
                "       Category: Reading",
                "       Description: Hardcover",
                "       Link: https://example.com",
            ]
        );
    }

    #[test]
    fn test_describe_item_untitled_skips_empty_fields() {
        let item = WishlistItem::default();
        assert_eq!(describe_item(12, &item), vec![" 12. [ ] (untitled)"]);
    }

    #[test]
    fn test_listed_item_json_shape() {
        let item = WishlistItem {
            gift: "Lamp".into(),
            ..WishlistItem::default()
        };
        let json = serde_json::to_value(ListedItem {
            number: 3,
            item: &item,
        })
        .unwrap();
        assert_eq!(json["number"], 3);
        assert_eq!(json["gift"], "Lamp");
        assert_eq!(json["selected"], false);
    }

    #[tokio::test]
    async fn test_filtered_numbers_follow_full_table_positions() {
        let store = store();
        let table = load_table(&store).await.unwrap();

        let listed = listed_items(&table, Some("Reading"));

        let numbered: Vec<_> = listed
            .iter()
            .map(|entry| (entry.number, entry.item.gift.as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "Book"), (3, "Kindle")]);
        for entry in &listed {
            assert_eq!(table.get(entry.number - 1), Some(entry.item));
        }
    }

    #[tokio::test]
    async fn test_handle_list() {
        let store = store();
        let reporter = RecordingReporter::new();

        handle_list("Wishlist", "https://example.com", &store, &list_args(Some("Home")), &reporter)
            .await
            .unwrap();
        handle_list("Wishlist", "https://example.com", &store, &list_args(Some("Garden")), &reporter)
            .await
            .unwrap();

        assert_eq!(*reporter.infos.borrow(), vec!["No items in this category."]);
        assert!(store.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_handle_list_on_fresh_sheet() {
        let store = MemoryStore::new();
        let reporter = RecordingReporter::new();

        handle_list("Wishlist", "https://example.com", &store, &list_args(None), &reporter)
            .await
            .unwrap();

        assert_eq!(reporter.infos.borrow().len(), 1);
        assert!(reporter.infos.borrow()[0].contains("empty"));
    }

    #[tokio::test]
    async fn test_handle_list_read_failure_is_error() {
        let store = store().with_faults(Faults {
            read: true,
            ..Faults::default()
        });
        let reporter = RecordingReporter::new();

        let result =
            handle_list("Wishlist", "https://example.com", &store, &list_args(None), &reporter)
                .await;

        assert!(result.is_err());
        assert!(reporter.infos.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_handle_categories() {
        let reporter = RecordingReporter::new();

        handle_categories(&store(), &reporter).await.unwrap();
        assert!(reporter.infos.borrow().is_empty());

        handle_categories(&MemoryStore::new(), &reporter).await.unwrap();
        assert_eq!(*reporter.infos.borrow(), vec!["No categories yet."]);

        let broken = MemoryStore::new().with_faults(Faults {
            read: true,
            ..Faults::default()
        });
        assert!(handle_categories(&broken, &reporter).await.is_err());
    }
}
