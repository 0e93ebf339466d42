//! Low-level binary file plumbing shared by the persistent store and the
//! index files.

pub mod codec;
pub mod header;
