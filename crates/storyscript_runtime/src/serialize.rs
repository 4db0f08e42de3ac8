//! Export of parse results using `MessagePack`.
//!
//! Results are written with named fields so other tools can read them as
//! maps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use storyscript_syntax::ParseResult;

use crate::error::{Error, ErrorKind, Result};

/// Serializes a parse result to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(result: &ParseResult<'_>) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(result).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Writes a parse result to a file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(result: &ParseResult<'_>, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(result)?;
    let file = File::create(path).map_err(|e| Error::io("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io("write to", path, &e))?;
    writer.flush().map_err(|e| Error::io("flush", path, &e))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
