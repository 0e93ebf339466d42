//! # Store Module
//!
//! Access to the persistent store of chemical component definitions.
//!
//! The index engine only depends on the [`traits::ObjectStore`] trait: a keyed
//! collection of containers, each holding named categories. Two implementations
//! are provided:
//!
//! - [`memory::MemoryStore`] - an ordered in-memory store
//! - [`persistent::PersistentStore`] - a single-file store with maintenance
//!   operations for creating and updating it
//!
//! Component definitions can be loaded from TOML with [`import`].

pub mod error;
pub mod import;
pub mod memory;
pub mod persistent;
pub mod traits;
