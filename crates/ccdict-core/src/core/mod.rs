//! # Core Module
//!
//! Stateless building blocks for working with a persistent store of the
//! chemical component dictionary.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Categories, containers, attribute schemas and
//!   typed row accessors for atoms, bonds, descriptors, identifiers and audit records
//! - **Storage** ([`store`]) - The object-store abstraction consumed by the index
//!   engine, plus in-memory and file-backed implementations
//! - **Binary I/O** ([`io`]) - The versioned file header shared by store and index files
//! - **Formulas** ([`formula`]) - Conversion of formula strings into element counts
//!
//! Nothing in this layer raises on malformed attribute values: absent attributes
//! read as `None` and unparsable numbers fall back to defaults.

pub mod formula;
pub mod io;
pub mod models;
pub mod store;
