//! Payload encoding for the store and index files.
//!
//! Payloads use bincode's fixed-width little-endian integers. Decoding is
//! bounded by the number of payload bytes actually present in the file, so a
//! corrupt length prefix fails with an error instead of a huge allocation.

use bincode::Options;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

pub fn encode_into<W, T>(writer: W, value: &T) -> bincode::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    options().serialize_into(writer, value)
}

/// Decodes one value, reading at most `limit` bytes.
pub fn decode_from<R, T>(reader: R, limit: u64) -> bincode::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    options().with_limit(limit).deserialize_from(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn values_decode_within_their_encoded_size() {
        let names = vec!["ATP".to_string(), "ADP".to_string()];
        let mut buf = Vec::new();
        encode_into(&mut buf, &names).unwrap();

        let decoded: Vec<String> = decode_from(Cursor::new(&buf), buf.len() as u64).unwrap();
        assert_eq!(decoded, names);
    }

    #[test]
    fn oversized_length_prefix_is_an_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(u64::MAX / 4).to_le_bytes());
        buf.extend_from_slice(b"ATP");

        let result: bincode::Result<String> = decode_from(Cursor::new(&buf), buf.len() as u64);
        assert!(result.is_err());
    }

    #[test]
    fn limit_smaller_than_payload_is_an_error() {
        let mut buf = Vec::new();
        encode_into(&mut buf, "ADENOSINE").unwrap();

        let result: bincode::Result<String> = decode_from(Cursor::new(&buf), 4);
        assert!(result.is_err());
    }
}
