//! On-disk form of the component and parent indices.
//!
//! Both files start with a [`FileHeader`] (magic `CCDX`, format version, file
//! kind) followed by a bincode payload. The component index payload is the
//! ordered summary list; the parent index payload is the parent map followed by
//! the child map. Writes truncate and replace the target file in place.
//!
//! The `read_*`/`write_*` functions report every failure. The `load_*`/`save_*`
//! wrappers log failures instead and fall back to an empty index or `false`.

use super::error::PersistError;
use super::parents::{ParentIndex, RelationMap};
use super::summary::{ComponentIndex, ComponentSummary};
use crate::core::io::codec;
use crate::core::io::header::{FileHeader, HEADER_LEN};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_INDEX_FILE: &str = "chemcomp-index.pic";
pub const DEFAULT_PARENT_INDEX_FILE: &str = "chemcomp-parent-index.pic";

const INDEX_MAGIC: [u8; 4] = *b"CCDX";
const INDEX_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Component = 1,
    Parent = 2,
}

impl IndexKind {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Component),
            2 => Some(Self::Parent),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Parent => "parent",
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PersistError + '_ {
    move |source| PersistError::Io {
        path: path_string(path),
        source,
    }
}

fn create_file(path: &Path, kind: IndexKind) -> Result<BufWriter<File>, PersistError> {
    let mut writer = BufWriter::new(File::create(path).map_err(io_error(path))?);
    FileHeader::new(INDEX_MAGIC, INDEX_FORMAT_VERSION, kind as u8)
        .write_to(&mut writer)
        .map_err(io_error(path))?;
    Ok(writer)
}

/// Opens an index file and checks its header. Returns the reader positioned at
/// the payload together with the payload length, which bounds decoding.
fn open_file(path: &Path, expected: IndexKind) -> Result<(BufReader<File>, u64), PersistError> {
    let file = File::open(path).map_err(io_error(path))?;
    let payload_len = file
        .metadata()
        .map_err(io_error(path))?
        .len()
        .saturating_sub(HEADER_LEN as u64);
    let mut reader = BufReader::new(file);
    let header = FileHeader::read_from(&mut reader).map_err(|source| {
        if source.kind() == std::io::ErrorKind::UnexpectedEof {
            PersistError::NotAnIndex {
                path: path_string(path),
            }
        } else {
            io_error(path)(source)
        }
    })?;
    check_header(path, &header, expected)?;
    Ok((reader, payload_len))
}

fn check_header(path: &Path, header: &FileHeader, expected: IndexKind) -> Result<(), PersistError> {
    if header.magic != INDEX_MAGIC {
        return Err(PersistError::NotAnIndex {
            path: path_string(path),
        });
    }
    if header.version != INDEX_FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            path: path_string(path),
            found: header.version,
            expected: INDEX_FORMAT_VERSION,
        });
    }
    match IndexKind::from_byte(header.kind) {
        Some(kind) if kind == expected => Ok(()),
        Some(kind) => Err(PersistError::WrongKind {
            path: path_string(path),
            expected: expected.label(),
            found: kind.label(),
        }),
        None => Err(PersistError::NotAnIndex {
            path: path_string(path),
        }),
    }
}

fn encode<W: Write, T: serde::Serialize>(
    writer: &mut W,
    value: &T,
    path: &Path,
) -> Result<(), PersistError> {
    codec::encode_into(writer, value).map_err(|source| PersistError::Encode {
        path: path_string(path),
        source,
    })
}

fn decode<R: Read, T: serde::de::DeserializeOwned>(
    reader: &mut R,
    limit: u64,
    path: &Path,
) -> Result<T, PersistError> {
    codec::decode_from(reader, limit).map_err(|source| PersistError::Decode {
        path: path_string(path),
        source,
    })
}

/// Writes `index` to `path`, replacing any existing file.
pub fn write_index(index: &ComponentIndex, path: &Path) -> Result<(), PersistError> {
    let mut writer = create_file(path, IndexKind::Component)?;
    encode(&mut writer, &index.summaries(), path)?;
    writer.flush().map_err(io_error(path))?;
    debug!("Wrote {} summaries to {:?}.", index.len(), path);
    Ok(())
}

/// Reads a component index written by [`write_index`].
pub fn read_index(path: &Path) -> Result<ComponentIndex, PersistError> {
    let (mut reader, limit) = open_file(path, IndexKind::Component)?;
    let summaries: Vec<ComponentSummary> = decode(&mut reader, limit, path)?;
    Ok(ComponentIndex::from_summaries(summaries))
}

/// Writes both relationship maps to `path`, parent map first.
pub fn write_parent_index(index: &ParentIndex, path: &Path) -> Result<(), PersistError> {
    let mut writer = create_file(path, IndexKind::Parent)?;
    encode(&mut writer, &index.parent_map, path)?;
    encode(&mut writer, &index.child_map, path)?;
    writer.flush().map_err(io_error(path))?;
    debug!(
        "Wrote {} parent and {} child entries to {:?}.",
        index.parent_map.len(),
        index.child_map.len(),
        path
    );
    Ok(())
}

pub fn read_parent_index(path: &Path) -> Result<ParentIndex, PersistError> {
    let (mut reader, limit) = open_file(path, IndexKind::Parent)?;
    let parent_map: RelationMap = decode(&mut reader, limit, path)?;
    let child_map: RelationMap = decode(&mut reader, limit, path)?;
    Ok(ParentIndex::from_maps(parent_map, child_map))
}

/// Lenient [`write_index`]: returns whether the file was written.
pub fn save_index(index: &ComponentIndex, path: &Path) -> bool {
    match write_index(index, path) {
        Ok(()) => {
            info!("Saved component index ({} entries) to {:?}.", index.len(), path);
            true
        }
        Err(e) => {
            warn!("Failed to save component index: {}", e);
            false
        }
    }
}

/// Lenient [`read_index`]: a missing or unreadable file yields an empty index.
pub fn load_index(path: &Path) -> ComponentIndex {
    read_index(path).unwrap_or_else(|e| {
        warn!("Failed to load component index: {}", e);
        ComponentIndex::new()
    })
}

pub fn save_parent_index(index: &ParentIndex, path: &Path) -> bool {
    match write_parent_index(index, path) {
        Ok(()) => {
            info!("Saved parent index to {:?}.", path);
            true
        }
        Err(e) => {
            warn!("Failed to save parent index: {}", e);
            false
        }
    }
}

pub fn load_parent_index(path: &Path) -> ParentIndex {
    read_parent_index(path).unwrap_or_else(|e| {
        warn!("Failed to load parent index: {}", e);
        ParentIndex::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_index() -> ComponentIndex {
        let mut atp = ComponentSummary::new("ATP");
        atp.name = Some("ADENOSINE-5'-TRIPHOSPHATE".into());
        atp.name_list = vec!["ADENOSINE-5'-TRIPHOSPHATE".into()];
        atp.type_counts.insert("C".into(), 10);
        atp.type_counts.insert("N".into(), 5);
        atp.set_inchi_key("ZKHQWZAMYRWXGA-KQYNXXCUSA-N");
        atp.smiles_list = vec!["c1nc(c2c(n1)n(cn2)C3C(C(C(O3)COP(=O)(O)OP(=O)(O)OP(=O)(O)O)O)O)N".into()];

        let mut eth = ComponentSummary::new("ETH");
        eth.type_counts.insert("C".into(), 2);
        eth.type_counts.insert("O".into(), 1);
        eth.smiles = Some("CCO".into());

        ComponentIndex::from_summaries(vec![atp, eth, ComponentSummary::new("ZN")])
    }

    fn sample_parents() -> ParentIndex {
        let mut parent_map = RelationMap::new();
        parent_map.insert("MET".into(), vec!["MSE".into(), "FME".into()]);
        let mut child_map = RelationMap::new();
        child_map.insert("MSE".into(), vec!["MET".into()]);
        child_map.insert("FME".into(), vec!["MET".into()]);
        child_map.insert("NRQ".into(), vec!["MET".into(), "TYR".into(), "GLY".into()]);
        ParentIndex::from_maps(parent_map, child_map)
    }

    #[test]
    fn component_index_round_trips_with_order_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);
        let index = sample_index();

        write_index(&index, &path).unwrap();
        let loaded = read_index(&path).unwrap();

        assert_eq!(loaded, index);
        assert_eq!(loaded.ids().collect::<Vec<_>>(), vec!["ATP", "ETH", "ZN"]);
    }

    #[test]
    fn parent_index_round_trips_both_maps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PARENT_INDEX_FILE);
        let parents = sample_parents();

        assert!(save_parent_index(&parents, &path));
        assert_eq!(load_parent_index(&path), parents);
    }

    #[test]
    fn saving_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);

        assert!(save_index(&sample_index(), &path));
        let smaller = ComponentIndex::from_summaries(vec![ComponentSummary::new("HOH")]);
        assert!(save_index(&smaller, &path));

        assert_eq!(load_index(&path), smaller);
    }

    #[test]
    fn loading_missing_file_yields_empty_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.pic");

        assert!(matches!(read_index(&path), Err(PersistError::Io { .. })));
        assert!(load_index(&path).is_empty());
        assert!(load_parent_index(&path).is_empty());
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);
        fs::write(&path, b"not an index at all").unwrap();

        assert!(matches!(read_index(&path), Err(PersistError::NotAnIndex { .. })));
        assert!(load_index(&path).is_empty());
    }

    #[test]
    fn truncated_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);
        write_index(&sample_index(), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(matches!(read_index(&path), Err(PersistError::Decode { .. })));
        assert!(load_index(&path).is_empty());
    }

    fn write_with_length_prefix(path: &Path, kind: IndexKind, prefix: u64) {
        let mut bytes = Vec::new();
        FileHeader::new(INDEX_MAGIC, INDEX_FORMAT_VERSION, kind as u8)
            .write_to(&mut bytes)
            .unwrap();
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&prefix.to_le_bytes());
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn huge_length_prefix_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);
        write_with_length_prefix(&path, IndexKind::Component, u64::MAX / 4);

        assert!(matches!(read_index(&path), Err(PersistError::Decode { .. })));
        assert!(load_index(&path).is_empty());
    }

    #[test]
    fn huge_length_prefix_in_parent_index_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PARENT_INDEX_FILE);
        write_with_length_prefix(&path, IndexKind::Parent, u64::MAX / 4);

        assert!(matches!(read_parent_index(&path), Err(PersistError::Decode { .. })));
        assert!(load_parent_index(&path).is_empty());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INDEX_FILE);
        let mut bytes = Vec::new();
        FileHeader::new(INDEX_MAGIC, INDEX_FORMAT_VERSION + 1, IndexKind::Component as u8)
            .write_to(&mut bytes)
            .unwrap();
        fs::write(&path, bytes).unwrap();

        assert!(matches!(
            read_index(&path),
            Err(PersistError::UnsupportedVersion { found: 2, expected: 1, .. })
        ));
    }

    #[test]
    fn index_kinds_are_not_interchangeable() {
        let dir = tempdir().unwrap();
        let index_path = dir.path().join(DEFAULT_INDEX_FILE);
        let parent_path = dir.path().join(DEFAULT_PARENT_INDEX_FILE);
        write_index(&sample_index(), &index_path).unwrap();
        write_parent_index(&sample_parents(), &parent_path).unwrap();

        assert!(matches!(
            read_parent_index(&index_path),
            Err(PersistError::WrongKind { expected: "parent", found: "component", .. })
        ));
        assert!(load_index(&parent_path).is_empty());
    }

    #[test]
    fn save_to_unwritable_path_reports_false() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(DEFAULT_INDEX_FILE);
        assert!(!save_index(&sample_index(), &path));
    }
}
