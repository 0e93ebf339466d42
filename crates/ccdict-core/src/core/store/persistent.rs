use super::error::StoreError;
use super::memory::MemoryStore;
use super::traits::ObjectStore;
use crate::core::io::codec;
use crate::core::io::header::{FileHeader, HEADER_LEN};
use crate::core::models::category::{Category, Container};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_STORE_FILE: &str = "chemcomp.db";
pub const DEFAULT_MIN_STORE_SIZE: u64 = 10;

const STORE_MAGIC: [u8; 4] = *b"CCDS";
const STORE_FORMAT_VERSION: u16 = 1;
const STORE_KIND: u8 = 0;
const TEMP_SUFFIX: &str = "-tmpstore";

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path_string(path),
        source,
    }
}

/// A chemical component store backed by a single file.
///
/// The whole store is loaded on [`open`](Self::open); maintenance operations
/// rewrite the file in place.
#[derive(Debug)]
pub struct PersistentStore {
    path: PathBuf,
    store: MemoryStore,
}

impl PersistentStore {
    /// Opens an existing store file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read,
    /// `StoreError::NotAStore` or `StoreError::UnsupportedVersion` if the
    /// header does not match, and `StoreError::Decode` if the payload is corrupt.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let containers = read_containers(path)?;
        debug!(
            "Opened store {:?} with {} container(s).",
            path,
            containers.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            store: MemoryStore::from_containers(containers),
        })
    }

    pub fn close(self) {
        debug!("Closed store {:?}.", self.path);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Writes a new store from `containers`.
    ///
    /// The store is first written next to `path` with a `-tmpstore` suffix and
    /// only moved over `path` when the temporary file is larger than `min_size`
    /// bytes, so an empty or failed write never replaces an existing store.
    ///
    /// # Return
    ///
    /// Returns `true` if `path` now holds the new store.
    pub fn create(
        path: &Path,
        containers: Vec<Container>,
        min_size: u64,
    ) -> Result<bool, StoreError> {
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(TEMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        let count = containers.len();
        write_containers(&tmp_path, &MemoryStore::from_containers(containers))?;

        let size = fs::metadata(&tmp_path)
            .map_err(io_error(&tmp_path))?
            .len();
        if size > min_size {
            fs::rename(&tmp_path, path).map_err(io_error(path))?;
            info!("Created store {:?} with {} container(s).", path, count);
            Ok(true)
        } else {
            debug!(
                "Store candidate {:?} is {} bytes (minimum {}); keeping previous store.",
                tmp_path, size, min_size
            );
            Ok(false)
        }
    }

    /// Replaces same-named containers and appends new ones, creating the store
    /// if it does not exist yet.
    pub fn update_container_list(
        path: &Path,
        containers: Vec<Container>,
    ) -> Result<(), StoreError> {
        let mut store = load_or_empty(path)?;
        let count = containers.len();
        for container in containers {
            store.insert(container);
        }
        write_containers(path, &store)?;
        info!("Updated {} container(s) in store {:?}.", count, path);
        Ok(())
    }

    /// Replaces or adds a single category in one container.
    pub fn update_object(
        path: &Path,
        container_name: &str,
        category: Category,
    ) -> Result<(), StoreError> {
        let mut store = load_or_empty(path)?;
        debug!(
            "Updating object '{}' in container '{}' of store {:?}.",
            category.name, container_name, path
        );
        store.set_object(container_name, category);
        write_containers(path, &store)
    }
}

impl ObjectStore for PersistentStore {
    fn container_index(&self) -> Result<Vec<String>, StoreError> {
        self.store.container_index()
    }

    fn fetch_object(
        &self,
        container_name: &str,
        object_name: &str,
    ) -> Result<Option<Category>, StoreError> {
        self.store.fetch_object(container_name, object_name)
    }
}

fn load_or_empty(path: &Path) -> Result<MemoryStore, StoreError> {
    if path.exists() {
        Ok(MemoryStore::from_containers(read_containers(path)?))
    } else {
        Ok(MemoryStore::new())
    }
}

fn read_containers(path: &Path) -> Result<Vec<Container>, StoreError> {
    let file = File::open(path).map_err(io_error(path))?;
    let payload_len = file
        .metadata()
        .map_err(io_error(path))?
        .len()
        .saturating_sub(HEADER_LEN as u64);
    let mut reader = BufReader::new(file);

    let header = FileHeader::read_from(&mut reader).map_err(|_| StoreError::NotAStore {
        path: path_string(path),
    })?;
    if header.magic != STORE_MAGIC || header.kind != STORE_KIND {
        return Err(StoreError::NotAStore {
            path: path_string(path),
        });
    }
    if header.version != STORE_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path: path_string(path),
            found: header.version,
            expected: STORE_FORMAT_VERSION,
        });
    }

    codec::decode_from(&mut reader, payload_len).map_err(|source| StoreError::Decode {
        path: path_string(path),
        source,
    })
}

fn write_containers(path: &Path, store: &MemoryStore) -> Result<(), StoreError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);

    FileHeader::new(STORE_MAGIC, STORE_FORMAT_VERSION, STORE_KIND)
        .write_to(&mut writer)
        .map_err(io_error(path))?;
    codec::encode_into(&mut writer, store.containers()).map_err(|source| {
        StoreError::Encode {
            path: path_string(path),
            source,
        }
    })?;
    writer.flush().map_err(io_error(path))
}
