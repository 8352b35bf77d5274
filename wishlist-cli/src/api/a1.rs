//! A1 notation helpers for the Sheets values API

/// Column letters for a 1-based column number (1 → A, 27 → AA)
pub fn column_letters(col: usize) -> String {
    let mut n = col;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Sheet title quoted for use in a range, with embedded quotes doubled
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// Range covering the whole sheet
pub fn sheet_range(sheet: &str) -> String {
    quote_sheet_name(sheet)
}

/// Single-cell range, e.g. `'Sheet1'!B3`
pub fn cell_range(sheet: &str, row: usize, col: usize) -> String {
    format!("{}!{}{}", quote_sheet_name(sheet), column_letters(col), row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(5), "E");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(703), "AAA");
        assert_eq!(column_letters(0), "");
    }

    #[test]
    fn test_cell_range() {
        assert_eq!(cell_range("Sheet1", 3, 2), "'Sheet1'!B3");
        assert_eq!(cell_range("Вишлист", 12, 5), "'Вишлист'!E12");
        assert_eq!(cell_range("Bob's list", 2, 1), "'Bob''s list'!A2");
    }
}
