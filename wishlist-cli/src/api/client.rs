//! Google Sheets v4 REST client

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::auth::{AuthManager, ServiceAccountKey};
use super::worksheet::Worksheet;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Turn a failed response body into a readable error
fn api_error(status: StatusCode, body: &str) -> anyhow::Error {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(kind) => anyhow::anyhow!(
                "Sheets API error {} ({}): {}",
                status.as_u16(),
                kind,
                parsed.error.message
            ),
            None => anyhow::anyhow!(
                "Sheets API error {}: {}",
                status.as_u16(),
                parsed.error.message
            ),
        },
        Err(_) if body.trim().is_empty() => anyhow::anyhow!("Sheets API error {}", status),
        Err(_) => anyhow::anyhow!("Sheets API error {}: {}", status.as_u16(), body.trim()),
    }
}

/// Authenticated handle to the Sheets API, cheap to clone
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    auth: Arc<AuthManager>,
    base_url: String,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            auth: Arc::new(AuthManager::new(key, http.clone())),
            http,
            base_url: SHEETS_API_BASE.to_string(),
        })
    }

    pub fn from_credentials_file(path: &Path) -> Result<Self> {
        Self::new(ServiceAccountKey::from_file(path)?)
    }

    pub fn service_account(&self) -> &str {
        self.auth.client_email()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// `{base}/{spreadsheet_id}{suffix}`
    pub(crate) fn url(&self, spreadsheet_id: &str, suffix: &str) -> String {
        format!("{}/{}{}", self.base_url, spreadsheet_id, suffix)
    }

    /// Attach the bearer token, send, and decode the JSON body
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let token = self.auth.access_token().await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .context("Sheets API request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Sheets API response")?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).context("Sheets API returned invalid JSON")
    }

    /// Open a spreadsheet by its document id
    pub async fn open_by_key(&self, spreadsheet_id: &str) -> Result<Spreadsheet> {
        debug!("Opening spreadsheet {}", spreadsheet_id);
        let request = self
            .http
            .get(self.url(spreadsheet_id, ""))
            .query(&[("fields", "properties.title,sheets.properties")]);

        let body = self
            .send(request)
            .await
            .with_context(|| format!("Failed to open spreadsheet {}", spreadsheet_id))?;

        let metadata: SpreadsheetMetadata =
            serde_json::from_value(body).context("Unexpected spreadsheet metadata")?;

        Ok(Spreadsheet {
            client: self.clone(),
            id: spreadsheet_id.to_string(),
            title: metadata.properties.title,
            sheets: metadata.sheets.into_iter().map(|s| s.properties).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    properties: SpreadsheetProperties,
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

/// Properties of one tab within a spreadsheet
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub index: i64,
}

/// An opened spreadsheet document
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    client: SheetsClient,
    id: String,
    title: String,
    sheets: Vec<SheetProperties>,
}

impl Spreadsheet {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sheet_titles(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.title.as_str()).collect()
    }

    /// Resolve a worksheet by its exact tab name
    pub fn worksheet(&self, name: &str) -> Result<Worksheet> {
        let Some(properties) = self.sheets.iter().find(|s| s.title == name) else {
            bail!(
                "Worksheet '{}' not found in '{}' (available: {})",
                name,
                self.title,
                self.sheet_titles().join(", ")
            );
        };

        Ok(Worksheet::new(
            self.client.clone(),
            self.id.clone(),
            properties.clone(),
        ))
    }
}
