//! Canonical wishlist schema

use serde::{Deserialize, Serialize};

/// Remote row holding the first data record. Row 1 is the header.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Logical columns in their fixed sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Selected,
    Gift,
    Category,
    Description,
    Link,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Selected,
        Column::Gift,
        Column::Category,
        Column::Description,
        Column::Link,
    ];

    /// Header text written to a fresh sheet
    pub fn header(self) -> &'static str {
        match self {
            Column::Selected => "Выбрано",
            Column::Gift => "Подарок",
            Column::Category => "Категория",
            Column::Description => "Описание",
            Column::Link => "Ссылка",
        }
    }

    /// 1-based sheet column
    pub fn number(self) -> usize {
        match self {
            Column::Selected => 1,
            Column::Gift => 2,
            Column::Category => 3,
            Column::Description => 4,
            Column::Link => 5,
        }
    }
}

/// Header row seeded into an empty sheet
pub fn canonical_headers() -> Vec<String> {
    Column::ALL.iter().map(|c| c.header().to_string()).collect()
}

/// One wishlist entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub selected: bool,
    pub gift: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

impl WishlistItem {
    /// Text value of a string column; `None` for Selected
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Selected => None,
            Column::Gift => Some(&self.gift),
            Column::Category => Some(&self.category),
            Column::Description => Some(&self.description),
            Column::Link => Some(&self.link),
        }
    }
}

/// Remote row number for a 0-based table index
pub fn row_number_for_index(index: usize) -> usize {
    index + HEADER_ROW_OFFSET
}

/// Items in remote row order, header excluded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WishlistTable {
    items: Vec<WishlistItem>,
}

impl WishlistTable {
    pub fn new(items: Vec<WishlistItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&WishlistItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WishlistItem> {
        self.items.iter()
    }

    /// Remote row for `index`, or `None` past the end of the table
    pub fn row_number(&self, index: usize) -> Option<usize> {
        (index < self.items.len()).then(|| row_number_for_index(index))
    }
}

impl<'a> IntoIterator for &'a WishlistTable {
    type Item = &'a WishlistItem;
    type IntoIter = std::slice::Iter<'a, WishlistItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
