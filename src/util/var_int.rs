//! Compact variable length integer (varint) encoding used on the wire.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Returns the number of bytes required for the varint.
#[must_use]
#[inline]
pub fn size(n: u64) -> usize {
    if n < 0xfd {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffffffff {
        5
    } else {
        9
    }
}

/// Writes the var int to bytes.
#[inline]
pub fn write(n: u64, writer: &mut dyn Write) -> io::Result<()> {
    if n < 0xfd {
        writer.write_u8(n as u8)
    } else if n <= 0xffff {
        writer.write_u8(0xfd)?;
        writer.write_u16::<LittleEndian>(n as u16)
    } else if n <= 0xffffffff {
        writer.write_u8(0xfe)?;
        writer.write_u32::<LittleEndian>(n as u32)
    } else {
        writer.write_u8(0xff)?;
        writer.write_u64::<LittleEndian>(n)
    }
}

/// Writes a length-prefixed byte array: the varint length followed by the bytes.
pub fn write_bytes(data: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let len = u64::try_from(data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u64"))?;
    write(len, writer)?;
    writer.write_all(data)
}

/// Returns the encoded size of a length-prefixed byte array.
#[must_use]
#[inline]
pub fn bytes_size(data: &[u8]) -> usize {
    size(data.len() as u64) + data.len()
}

/// Reads a var int from bytes.
#[inline]
pub fn read(reader: &mut dyn Read) -> io::Result<u64> {
    let n0 = reader.read_u8()?;
    match n0 {
        0xff => reader.read_u64::<LittleEndian>(),
        0xfe => reader.read_u32::<LittleEndian>().map(u64::from),
        0xfd => reader.read_u16::<LittleEndian>().map(u64::from),
        _ => Ok(n0 as u64),
    }
}
