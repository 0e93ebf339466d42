//! # Engine Module
//!
//! Construction, persistence and lookup of the chemical component indices.
//!
//! ## Overview
//!
//! The engine walks an [`ObjectStore`](crate::core::store::traits::ObjectStore)
//! once per build and derives two independent products:
//!
//! - a [`ComponentIndex`](summary::ComponentIndex) of per-component summaries
//!   (names, formula, element histogram, SMILES/InChI descriptors)
//! - a [`ParentIndex`](parents::ParentIndex) of modified-residue relationships
//!
//! Both can be written to and read from versioned binary files, and the
//! component index answers approximate element-count queries.
//!
//! ## Architecture
//!
//! - **Summaries** ([`summary`]) - The per-component record and the ordered index
//! - **Builders** ([`builder`], [`parents`]) - Single sequential scans of a store
//! - **Persistence** ([`persist`]) - Index file format with strict and lenient entry points
//! - **Search** ([`search`]) - Tolerance-based formula matching
//! - **Configuration** ([`config`]) - File locations and search tolerances
//! - **Progress Monitoring** ([`progress`]) - Optional build progress callbacks
//! - **Error Handling** ([`error`]) - Build and persistence errors
//!
//! Strict functions return every failure to the caller. The lenient variants
//! (`build_index`, `load_index`, ...) log the failure and return an empty value.

pub mod builder;
pub mod config;
pub mod error;
pub mod parents;
pub mod persist;
pub mod progress;
pub mod search;
pub mod summary;
