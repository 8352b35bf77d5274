//! Startup configuration
//!
//! Settings come from CLI flags, then the environment (a `.env` file is loaded
//! by `main`), then defaults. They are resolved once and never re-read.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

pub const CREDENTIALS_PATH_VAR: &str = "GOOGLE_CREDENTIALS_PATH";
pub const SHEETS_URL_VAR: &str = "SHEETS_URL";
pub const SHEET_NAME_VAR: &str = "SHEET_NAME";

pub const DEFAULT_CREDENTIALS_PATH: &str = "./credentials.json";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Marker left in the sample `.env`
const URL_PLACEHOLDER: &str = "YOUR_SHEET_ID";

/// Setup steps shown alongside configuration errors
pub const SETUP_HINTS: &[&str] = &[
    "1. Create a Google Sheets spreadsheet",
    "2. Share it with the client_email from credentials.json",
    "3. Put the spreadsheet URL into SHEETS_URL in the .env file",
];

/// Values supplied on the command line, overriding the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub credentials_path: Option<PathBuf>,
    pub sheets_url: Option<String>,
    pub sheet_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials_path: PathBuf,
    pub sheets_url: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl Config {
    /// Resolve from the process environment
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Resolve with an explicit variable lookup
    pub fn resolve(overrides: Overrides, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sheets_url = overrides
            .sheets_url
            .or_else(|| lookup(SHEETS_URL_VAR))
            .map(|u| u.trim().to_string())
            .with_context(|| format!("{} is not set", SHEETS_URL_VAR))?;

        if sheets_url.contains(URL_PLACEHOLDER) {
            bail!(
                "{} still contains the {} placeholder",
                SHEETS_URL_VAR,
                URL_PLACEHOLDER
            );
        }

        let spreadsheet_id = spreadsheet_id_from_url(&sheets_url)?;

        let credentials_path = overrides
            .credentials_path
            .or_else(|| lookup(CREDENTIALS_PATH_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH));

        if !credentials_path.exists() {
            bail!(
                "Credentials file not found: {} (download the service account key from Google Cloud Console)",
                credentials_path.display()
            );
        }

        let sheet_name = overrides
            .sheet_name
            .or_else(|| lookup(SHEET_NAME_VAR))
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());

        Ok(Self {
            credentials_path,
            sheets_url,
            spreadsheet_id,
            sheet_name,
        })
    }
}

/// Spreadsheet id: the path segment after `/d/`
pub fn spreadsheet_id_from_url(url: &str) -> Result<String> {
    let (_, rest) = url
        .split_once("/d/")
        .with_context(|| format!("Not a spreadsheet URL (no /d/ segment): {}", url))?;

    let id = rest.split('/').next().unwrap_or_default();
    if id.is_empty() {
        bail!("Spreadsheet URL has an empty document id: {}", url);
    }
    Ok(id.to_string())
}
