//! A binary blob is one [`Datum`] behind a fixed header.
//!
//! ```text
//! struct Blob {
//!     magic:          [u8; 4],    // b"MRSH"
//!     format_version: u8,         // 1
//!     root:           Datum,
//! }
//! ```
//!
//! Nothing may follow the root datum.

use anyhow::{anyhow, Result};
use marshal_types::serde::{Datum, ReadResult};
use std::io::{Cursor, Read, Write};

pub const MAGIC: [u8; 4] = *b"MRSH";

pub const FORMAT_VERSION: u8 = 1;

pub const HEADER_LEN: usize = MAGIC.len() + 1;

pub fn seal(root: &Datum, max_depth: usize) -> Result<Vec<u8>> {
    let mut blob = Vec::with_capacity(HEADER_LEN);
    blob.write_all(&MAGIC)?;
    blob.write_all(&[FORMAT_VERSION])?;
    root.ser(&mut blob, max_depth)?;
    Ok(blob)
}

pub fn open(blob: &[u8], max_depth: usize) -> Result<Datum> {
    let mut r = Cursor::new(blob);

    /* magic and format_version */
    let mut header = [0u8; HEADER_LEN];
    r.read_exact(&mut header)
        .map_err(|_| anyhow!("Blob of {} bytes is shorter than its header.", blob.len()))?;
    if header[..MAGIC.len()] != MAGIC {
        return Err(anyhow!("Blob does not start with {:?}.", MAGIC));
    }
    let version = header[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(anyhow!("Unsupported blob format version {}.", version));
    }

    /* root */
    let root = match Datum::deser(&mut r, max_depth)? {
        ReadResult::EOF => return Err(anyhow!("Blob holds a header but no datum.")),
        ReadResult::Some(_r_len, root) => root,
    };

    let trailing = blob.len() - r.position() as usize;
    if trailing != 0 {
        return Err(anyhow!("{} bytes follow the root datum.", trailing));
    }

    Ok(root)
}
