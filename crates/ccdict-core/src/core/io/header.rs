//! Fixed-size header shared by every binary file this crate writes.
//!
//! ```text
//! [4 bytes] magic
//! [2 bytes] format version (little-endian u16)
//! [1 byte ] file kind
//! ```

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

pub const HEADER_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 4],
    pub version: u16,
    pub kind: u8,
}

impl FileHeader {
    pub const fn new(magic: [u8; 4], version: u16, kind: u8) -> Self {
        Self {
            magic,
            version,
            kind,
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_u16::<LittleEndian>(self.version)?;
        writer.write_u8(self.kind)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        let version = reader.read_u16::<LittleEndian>()?;
        let kind = reader.read_u8()?;
        Ok(Self {
            magic,
            version,
            kind,
        })
    }
}
