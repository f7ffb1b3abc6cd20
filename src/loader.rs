//! Input loading
//!
//! Reads the whole URL list into memory and decodes it strictly as UTF-8.
//! A leading UTF-8 byte order mark is skipped; any other encoding is fatal.

use crate::error::{ExtractError, Result};
use bytesize::ByteSize;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read and decode the input file
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} from {:?}", ByteSize(bytes.len() as u64), path);

    decode_bytes(&bytes)
        .map(Cow::into_owned)
        .map_err(|reason| ExtractError::Malformed {
            path: path.to_path_buf(),
            reason,
        })
}

/// Strictly decode `content` as UTF-8, skipping a UTF-8 BOM
fn decode_bytes(content: &[u8]) -> std::result::Result<Cow<'_, str>, &'static str> {
    let bom_len = match Encoding::for_bom(content) {
        Some((encoding, bom_len)) if encoding == UTF_8 => bom_len,
        Some((encoding, _)) => {
            log::debug!("Found {} byte order mark", encoding.name());
            return Err("byte order mark of another encoding");
        }
        None => 0,
    };

    UTF_8
        .decode_without_bom_handling_and_without_replacement(&content[bom_len..])
        .ok_or("invalid byte sequence")
}
