//! Category browsing over a loaded table
//!
//! Filtered entries keep their index in the full table, so edits and deletes
//! issued from a filtered view still hit the right remote row.

use super::item::{WishlistItem, WishlistTable};

/// Distinct categories in order of first appearance
pub fn categories(table: &WishlistTable) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in table {
        if !seen.iter().any(|c| c == &item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Items whose category equals `category`; `None` keeps all items
pub fn filter_by_category<'a>(
    table: &'a WishlistTable,
    category: Option<&str>,
) -> Vec<(usize, &'a WishlistItem)> {
    table
        .iter()
        .enumerate()
        .filter(|(_, item)| category.is_none_or(|c| item.category == c))
        .collect()
}
