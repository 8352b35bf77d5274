//! Wishlist stored in a Google Sheets worksheet
//!
//! [`wishlist`] holds the schema normalization and row-level CRUD, written
//! against the [`store::TabularStore`] trait. [`api`] provides the Google
//! Sheets implementation of that trait, and [`cli`] the command handlers
//! used by the binary.

pub mod api;
pub mod cli;
pub mod config;
pub mod report;
pub mod store;
pub mod wishlist;
