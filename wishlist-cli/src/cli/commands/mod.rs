//! Command handlers
//!
//! Handlers return `anyhow::Result<()>`; `main` prints the error and exits
//! with a failing status. Argument and validation problems are raised here
//! before any remote call. Remote write failures are reported by the wishlist
//! mediator itself, and the handler only adds a short summary error.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;

use anyhow::{Result, bail};

use crate::api::Session;
use crate::report::Reporter;
use crate::store::TabularStore;
use crate::wishlist::{WishlistTable, load_outcome};

use super::Commands;

/// Dispatch a parsed command against the open session
pub async fn run(command: Commands, session: &Session, reporter: &dyn Reporter) -> Result<()> {
    let store = &session.worksheet;
    match command {
        Commands::List(args) => {
            list::handle_list(&session.title, &session.url, store, &args, reporter).await
        }
        Commands::Categories => list::handle_categories(store, reporter).await,
        Commands::Add(args) => add::handle_add(store, args, reporter).await,
        Commands::Edit(args) => edit::handle_edit(store, args, reporter).await,
        Commands::Delete(args) => delete::handle_delete(store, args, reporter).await,
    }
}

/// Load the table; a failed read is an error, a fresh sheet is an empty table
pub(crate) async fn load_table(store: &dyn TabularStore) -> Result<WishlistTable> {
    load_outcome(store).await.into_result()
}

/// 0-based table index for a 1-based item number shown to the user
pub(crate) fn resolve_index(table: &WishlistTable, number: usize) -> Result<usize> {
    if table.is_empty() {
        bail!("The wishlist is empty");
    }
    match number.checked_sub(1) {
        Some(index) if index < table.len() => Ok(index),
        _ => bail!(
            "No item #{} (valid numbers are 1 to {})",
            number,
            table.len()
        ),
    }
}
