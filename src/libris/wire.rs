//! Binary catalog format.
//!
//! ```text
//! catalog := entry_count:u32le entry*
//! entry   := field{9}              // wire order: title, author, pages,
//!                                  // edition, language, publisher,
//!                                  // pubdate, isbn, description
//! field   := length:u32le bytes[length]   // raw bytes, no terminator
//! ```
//!
//! Integers are little-endian. The format has no version marker and no
//! per-field separator beyond the length prefix; a stream that ends before
//! a record is complete is reported as [`LibrisError::Truncated`]. Field
//! bytes are decoded lossily, so a file written with a different text
//! encoding loads instead of aborting.

use std::io::{ErrorKind, Read, Write};

use crate::catalog::Catalog;
use crate::error::{LibrisError, Result};
use crate::model::{Entry, Field};

fn read_exact(reader: &mut impl Read, buf: &mut [u8], what: &str) -> Result<()> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(LibrisError::Truncated(format!(
            "stream ended while reading {what}"
        ))),
        Err(e) => Err(LibrisError::Io(e)),
    }
}

/// Writes one length-prefixed field.
pub fn write_string(writer: &mut impl Write, value: &str) -> Result<()> {
    let len = value.len() as u32;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Reads one length-prefixed field.
pub fn read_string(reader: &mut impl Read) -> Result<String> {
    let mut len_bytes = [0u8; 4];
    read_exact(reader, &mut len_bytes, "a field length")?;
    let len = u32::from_le_bytes(len_bytes) as usize;

    let mut bytes = vec![0u8; len];
    read_exact(reader, &mut bytes, "field bytes")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the nine fields of one entry in wire order.
pub fn write_entry(writer: &mut impl Write, entry: &Entry) -> Result<()> {
    for field in Field::ALL {
        write_string(writer, field.get(entry))?;
    }
    Ok(())
}

/// Reads one entry; fails with [`LibrisError::Truncated`] if the stream
/// ends before all nine fields are in.
pub fn read_entry(reader: &mut impl Read) -> Result<Entry> {
    let mut entry = Entry::new();
    for field in Field::ALL {
        field.set(&mut entry, read_string(reader)?);
    }
    Ok(entry)
}

/// Writes the record count followed by every entry, in catalog order.
pub fn write_catalog(writer: &mut impl Write, catalog: &Catalog) -> Result<()> {
    let count = catalog.len() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for (_, entry) in catalog.iter() {
        write_entry(writer, &entry.borrow())?;
    }
    Ok(())
}

/// Reads a whole catalog, appending each record through the owning `add`
/// path.
pub fn read_catalog(reader: &mut impl Read) -> Result<Catalog> {
    let mut count_bytes = [0u8; 4];
    read_exact(reader, &mut count_bytes, "the record count")?;
    let count = u32::from_le_bytes(count_bytes);

    let mut catalog = Catalog::new();
    for _ in 0..count {
        let entry = read_entry(reader)?;
        catalog.add(&entry);
    }
    Ok(catalog)
}
