//! A single worksheet exposed as a `TabularStore`

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde_json::{Value, json};

use super::a1::{cell_range, sheet_range};
use super::client::{SheetProperties, SheetsClient};
use crate::store::{RawRecord, TabularStore};

/// Value input modes of the values API
mod input {
    pub const RAW: &str = "RAW";
    pub const USER_ENTERED: &str = "USER_ENTERED";
}

#[derive(Debug, Clone)]
pub struct Worksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    properties: SheetProperties,
}

impl Worksheet {
    pub(crate) fn new(
        client: SheetsClient,
        spreadsheet_id: String,
        properties: SheetProperties,
    ) -> Self {
        Self {
            client,
            spreadsheet_id,
            properties,
        }
    }

    pub fn title(&self) -> &str {
        &self.properties.title
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        self.client.url(
            &self.spreadsheet_id,
            &format!("/values/{}{}", urlencoding::encode(range), suffix),
        )
    }

    /// Every non-trailing-empty row of the sheet as text
    pub async fn get_all_values(&self) -> Result<Vec<Vec<String>>> {
        let range = sheet_range(self.title());
        debug!("Reading all values from {}", range);

        let request = self.client.http().get(self.values_url(&range, ""));
        let body = self.client.send(request).await?;
        Ok(values_from_response(&body))
    }
}

/// Extract the `values` grid, stringifying any non-text cells
fn values_from_response(body: &Value) -> Vec<Vec<String>> {
    let Some(rows) = body.get("values").and_then(Value::as_array) else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_text).collect())
                .unwrap_or_default()
        })
        .collect()
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// First row is the header; every later row becomes a record padded to the
/// header width. Cells beyond the header are dropped.
pub fn records_from_values(values: &[Vec<String>]) -> Vec<RawRecord> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}

#[async_trait]
impl TabularStore for Worksheet {
    async fn read_all_records(&self) -> Result<Vec<RawRecord>> {
        let values = self
            .get_all_values()
            .await
            .with_context(|| format!("Failed to read worksheet '{}'", self.title()))?;
        Ok(records_from_values(&values))
    }

    async fn append_row(&self, values: &[String]) -> Result<()> {
        let range = sheet_range(self.title());
        debug!("Appending {} cells to {}", values.len(), range);

        let request = self
            .client
            .http()
            .post(self.values_url(&range, ":append"))
            .query(&[
                ("valueInputOption", input::RAW),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [values] }));

        self.client
            .send(request)
            .await
            .with_context(|| format!("Failed to append row to '{}'", self.title()))?;
        Ok(())
    }

    async fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        let range = cell_range(self.title(), row, col);
        debug!("Writing {}", range);

        let request = self
            .client
            .http()
            .put(self.values_url(&range, ""))
            .query(&[("valueInputOption", input::USER_ENTERED)])
            .json(&json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [[value]],
            }));

        self.client
            .send(request)
            .await
            .with_context(|| format!("Failed to write cell {}", range))?;
        Ok(())
    }

    async fn delete_row(&self, row: usize) -> Result<()> {
        debug!("Deleting row {} of '{}'", row, self.title());
        let start = row.checked_sub(1).context("Row numbers start at 1")?;

        let request = self
            .client
            .http()
            .post(self.client.url(&self.spreadsheet_id, ":batchUpdate"))
            .json(&delete_row_request(self.properties.sheet_id, start));

        self.client
            .send(request)
            .await
            .with_context(|| format!("Failed to delete row {} of '{}'", row, self.title()))?;
        Ok(())
    }
}

/// `batchUpdate` body removing the zero-based row `start`
fn delete_row_request(sheet_id: i64, start: usize) -> Value {
    json!({
        "requests": [{
            "deleteDimension": {
                "range": {
                    "sheetId": sheet_id,
                    "dimension": "ROWS",
                    "startIndex": start,
                    "endIndex": start + 1,
                }
            }
        }]
    })
}
