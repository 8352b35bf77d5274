//! Google Sheets access
//!
//! Service-account auth, spreadsheet lookup and the [`worksheet::Worksheet`] store that
//! the wishlist reads from and writes to.

pub mod a1;
pub mod auth;
pub mod client;
pub mod session;
pub mod worksheet;

pub use session::Session;
