use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use fixtab_core::Table;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Container magic, `b"FXTB"`.
pub const MAGIC: [u8; 4] = *b"FXTB";
/// Container format version.
pub const VERSION: u8 = 1;

/// Function identifiers carried in the container header.
pub const FUNC_RSQRT: u8 = 1;
pub const FUNC_SIN: u8 = 2;

/// One table plus the metadata a reader needs to interpret it.
///
/// Layout: `b"FXTB"` `[u8 version]` `[u8 func_id]` `[u8 frac_bits]`
/// `[u8 bits]` `[u32 LE entry count]` then `count` u16 LE entries.
/// Blobs are self-delimiting, so several can be concatenated in one file
/// (one per width, ascending, mirroring the text emission order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlob {
    pub func_id: u8,
    pub frac_bits: u8,
    pub table: Table,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("bad magic {0:02x?}, expected \"FXTB\"")]
    BadMagic([u8; 4]),

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u8),

    #[error("table width {0} outside supported range 1..=15")]
    BadBits(u8),

    #[error("{bits}-bit table declares {actual} entries, expected {expected}")]
    LengthMismatch {
        bits: u8,
        expected: u32,
        actual: u32,
    },
}

/// Write one table blob.
pub fn write_table<W: Write>(writer: &mut W, blob: &TableBlob) -> io::Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_u8(VERSION)?;
    writer.write_u8(blob.func_id)?;
    writer.write_u8(blob.frac_bits)?;
    writer.write_u8(blob.table.bits as u8)?;
    writer.write_u32::<LittleEndian>(blob.table.entries.len() as u32)?;
    for &entry in &blob.table.entries {
        writer.write_u16::<LittleEndian>(entry)?;
    }
    Ok(())
}

/// Read one table blob, validating magic, version, the bit width, and the
/// length the width implies.
pub fn read_table<R: Read>(reader: &mut R) -> Result<TableBlob, ReadError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReadError::BadMagic(magic));
    }

    let version = reader.read_u8()?;
    if version != VERSION {
        return Err(ReadError::UnsupportedVersion(version));
    }

    let func_id = reader.read_u8()?;
    let frac_bits = reader.read_u8()?;
    let bits = reader.read_u8()?;
    let count = reader.read_u32::<LittleEndian>()?;

    // bits comes off the wire; gate it before it sizes a shift or an
    // allocation
    if !(1..=15).contains(&bits) {
        return Err(ReadError::BadBits(bits));
    }

    let expected = (1u32 << bits) + 1;
    if count != expected {
        return Err(ReadError::LengthMismatch {
            bits,
            expected,
            actual: count,
        });
    }

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        entries.push(reader.read_u16::<LittleEndian>()?);
    }

    Ok(TableBlob {
        func_id,
        frac_bits,
        table: Table {
            bits: u32::from(bits),
            entries,
        },
    })
}
