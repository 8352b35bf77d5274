//! Wishlist schema, normalization and row-level CRUD
//!
//! The sheet is the only source of truth. A [`WishlistTable`] is built fresh
//! from the store by [`load`], and changes go straight back to the store
//! through [`add`], [`update`] and [`delete`].

pub mod codec;
pub mod filter;
pub mod item;
pub mod mediator;
pub mod normalize;

pub use filter::{categories, filter_by_category};
pub use item::{WishlistItem, WishlistTable};
pub use mediator::{add, delete, prepare, update, validate};
pub use normalize::{LoadOutcome, load, load_outcome};
