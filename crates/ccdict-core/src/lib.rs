//! # ccdict Core Library
//!
//! A derived, queryable index over a persistent store of the chemical component
//! dictionary: per-component summaries, modified-residue relationships and
//! formula-based search.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Category and container models, typed row
//!   accessors, the object-store abstraction with its in-memory and file-backed
//!   implementations, and formula parsing.
//!
//! - **[`engine`]: The Logic Core.** Index and parent-index builders, the
//!   versioned index file format, and tolerance-based formula search. Every
//!   operation here reports failures through explicit error types.
//!
//! - **[`workflows`]: The Public API.** Complete procedures that open a store,
//!   build and persist the indices, and read them back. This is the boundary
//!   where failures are logged and collapsed into empty results.

pub mod core;
pub mod engine;
pub mod workflows;
