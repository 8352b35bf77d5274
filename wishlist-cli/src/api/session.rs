//! The long-lived connection used by every command

use anyhow::{Context, Result};
use log::info;

use super::client::SheetsClient;
use super::worksheet::Worksheet;
use crate::config::Config;

/// Document and worksheet, opened once at startup
///
/// The worksheet carries the authenticated client, so the access token cache
/// lives as long as the session.
#[derive(Debug, Clone)]
pub struct Session {
    pub title: String,
    pub url: String,
    pub worksheet: Worksheet,
}

impl Session {
    pub async fn open(config: &Config) -> Result<Self> {
        let client = SheetsClient::from_credentials_file(&config.credentials_path)
            .context("Failed to initialise Google Sheets client")?;

        let spreadsheet = client.open_by_key(&config.spreadsheet_id).await?;
        let worksheet = spreadsheet.worksheet(&config.sheet_name)?;

        info!(
            "Opened '{}' / '{}' as {}",
            spreadsheet.title(),
            worksheet.title(),
            client.service_account()
        );

        Ok(Self {
            title: spreadsheet.title().to_string(),
            url: config.sheets_url.clone(),
            worksheet,
        })
    }
}
