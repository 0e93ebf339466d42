//! # Workflows Module
//!
//! Top-level entry points that tie the store, the index builders and the index
//! files together.
//!
//! - **Index Workflow** ([`index`]) - Build the component or parent index from a
//!   persistent store, save it, and read saved indices back.
//!
//! The `run_*` functions return errors to the caller. The `make_*` and `open_*`
//! functions never fail: a failed build yields an empty index and nothing is
//! written, and a failed load yields an empty index.

pub mod index;
