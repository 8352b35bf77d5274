//! Mapping between wishlist items and sheet cells
//!
//! The "selected" flag is stored as text. Reading is lenient: the column is
//! located by a case-insensitive substring match on its header and only the
//! literals `true`/`false` (any case) are understood. Writing is strict: the
//! sheet gets `TRUE` or an empty cell, which the spreadsheet renders natively
//! as a checkbox state. The two directions are intentionally not symmetric.

use crate::store::RawRecord;

use super::item::{Column, WishlistItem};

/// Two-way codec for the "selected" column
pub struct SelectedCodec;

impl SelectedCodec {
    /// Lower-case fragment any selected-column header must contain
    pub const HEADER_FRAGMENT: &'static str = "выбрано";

    /// Cell text for a selected item
    pub const TRUE_LITERAL: &'static str = "TRUE";

    /// Cell text for an unselected item
    pub const FALSE_LITERAL: &'static str = "";

    pub fn matches_header(header: &str) -> bool {
        header.to_lowercase().contains(Self::HEADER_FRAGMENT)
    }

    /// `"true"` → true, `"false"` → false, anything else → false
    pub fn parse(value: &str) -> bool {
        match value.to_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => false,
        }
    }

    /// Selected flag from the first matching column of `record`
    pub fn read(record: &RawRecord) -> bool {
        record
            .find_by_header(Self::matches_header)
            .map(|(_, value)| Self::parse(value))
            .unwrap_or(false)
    }

    pub fn serialize(selected: bool) -> &'static str {
        if selected {
            Self::TRUE_LITERAL
        } else {
            Self::FALSE_LITERAL
        }
    }
}

/// Normalize one raw record into an item
pub fn item_from_record(record: &RawRecord) -> WishlistItem {
    let text = |column: Column| record.get(column.header()).unwrap_or_default().to_string();

    WishlistItem {
        selected: SelectedCodec::read(record),
        gift: text(Column::Gift),
        category: text(Column::Category),
        description: text(Column::Description),
        link: text(Column::Link),
    }
}

/// Serialize an item into the five-cell row, in column order
pub fn item_to_row(item: &WishlistItem) -> Vec<String> {
    Column::ALL
        .iter()
        .map(|&column| match item.text(column) {
            Some(text) => text.to_string(),
            None => SelectedCodec::serialize(item.selected).to_string(),
        })
        .collect()
}
