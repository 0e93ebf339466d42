use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("'{path}' is not a chemical component store")]
    NotAStore { path: String },

    #[error("Unsupported store format version {found} in '{path}' (expected {expected})")]
    UnsupportedVersion {
        path: String,
        found: u16,
        expected: u16,
    },

    #[error("Failed to decode store '{path}': {source}")]
    Decode {
        path: String,
        source: bincode::Error,
    },

    #[error("Failed to encode store '{path}': {source}")]
    Encode {
        path: String,
        source: bincode::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid container definition in '{path}': {message}")]
    InvalidContainer { path: String, message: String },

    #[error("Store backend failure: {0}")]
    Backend(String),
}
