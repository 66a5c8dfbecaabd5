//! Feed domain types: the item entity and the loading contract.
//!
//! This module is transport-agnostic. It defines what a feed *is*
//! ([`FeedItem`]), what loading one *means* ([`FeedLoader`]), and the only
//! two ways a load can fail ([`LoadError`]). How bytes get here lives in
//! [`crate::api`].

mod item;
mod loader;

pub use item::FeedItem;
pub use loader::{FeedLoader, LoadError, LoadResult};
