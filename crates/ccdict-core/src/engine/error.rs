use crate::core::store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("'{path}' is not a component index file")]
    NotAnIndex { path: String },

    #[error("Unsupported index format version {found} in '{path}' (expected {expected})")]
    UnsupportedVersion {
        path: String,
        found: u16,
        expected: u16,
    },

    #[error("'{path}' holds a {found} index, expected a {expected} index")]
    WrongKind {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to encode index '{path}': {source}")]
    Encode {
        path: String,
        source: bincode::Error,
    },

    #[error("Failed to decode index '{path}': {source}")]
    Decode {
        path: String,
        source: bincode::Error,
    },
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Store access failed: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to index component '{cc_id}': {source}")]
    Component {
        cc_id: String,
        #[source]
        source: StoreError,
    },

    #[error("Index persistence failed: {0}")]
    Persist(#[from] PersistError),
}
