//! Command-line interface definition

pub mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "wishlist-cli",
    version,
    about = "Manage a wishlist stored in a Google Sheets worksheet"
)]
pub struct Cli {
    /// Service account key file (default: $GOOGLE_CREDENTIALS_PATH or ./credentials.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Spreadsheet URL (default: $SHEETS_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub sheet_url: Option<String>,

    /// Worksheet tab name (default: $SHEET_NAME or Sheet1)
    #[arg(long, global = true, value_name = "NAME")]
    pub sheet_name: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            credentials_path: self.credentials.clone(),
            sheets_url: self.sheet_url.clone(),
            sheet_name: self.sheet_name.clone(),
        }
    }

    /// Default `env_logger` filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show wishlist items
    List(ListArgs),
    /// Show the distinct categories
    Categories,
    /// Add a new item
    Add(AddArgs),
    /// Edit an item by its list number
    Edit(EditArgs),
    /// Delete an item by its list number
    Delete(DeleteArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show items in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Gift name
    pub gift: String,

    #[arg(short, long, default_value = "")]
    pub category: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    #[arg(short, long, default_value = "")]
    pub link: String,

    /// Mark the item as already selected
    #[arg(short, long)]
    pub selected: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Item number as shown by `list`
    pub number: usize,

    #[arg(short, long)]
    pub gift: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub link: Option<String>,

    /// Set the selected flag; kept as is when omitted
    #[arg(short, long, value_name = "BOOL")]
    pub selected: Option<bool>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Item number as shown by `list`
    pub number: usize,
}
