//! Data model for chemical component definitions as held in the store.
//!
//! - [`category`] - categories (row tables) and the containers grouping them
//! - [`schema`] - attribute-name lookup and untyped row access
//! - [`rows`] - typed accessors for each category used by the indices
//! - [`iter`] - forward and reverse traversal of decoded rows
//! - [`elements`] - element symbols and atomic numbers

pub mod category;
pub mod elements;
pub mod iter;
pub mod rows;
pub mod schema;
