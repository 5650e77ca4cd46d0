// Transport boundary: gzip compression + base64 around the raw wire bytes.
use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{PackError, PackResult};
use crate::lua_data::LuaData;
use crate::wire;

/// Working capacity for decompressed wire buffers (32 KiB).
pub const MAX_DECODED_LEN: usize = 0x8000;

/// Compresses wire bytes with gzip.
pub fn compress(bytes: &[u8]) -> PackResult<Vec<u8>> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(bytes)
        .map_err(|e| PackError::Compress(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| PackError::Compress(e.to_string()))
}

/// Decompresses up to `max_len` output bytes; anything past that is a
/// [`PackError::Capacity`] failure, never a truncation.
pub fn decompress(bytes: &[u8], max_len: usize) -> PackResult<Vec<u8>> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut out = Vec::new();

    decoder
        .by_ref()
        .take(max_len as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| {
            tracing::debug!(error = %e, "failed to decompress the data");
            PackError::Decompress(e.to_string())
        })?;

    if out.len() > max_len {
        tracing::debug!(limit = max_len, "decompressed payload over capacity");
        return Err(PackError::Capacity { limit: max_len });
    }

    Ok(out)
}

/// Encodes a value tree into its compressed, text-safe transport form.
pub fn serialize(data: &LuaData) -> PackResult<String> {
    let raw = wire::encode(data)?;
    let compressed = compress(&raw)?;

    Ok(STANDARD.encode(compressed))
}

/// Decodes the transport form back into a value tree.
pub fn deserialize(text: &str) -> PackResult<LuaData> {
    let compressed = STANDARD
        .decode(text)
        .map_err(|e| PackError::TextDecode(e.to_string()))?;
    let raw = decompress(&compressed, MAX_DECODED_LEN)?;

    wire::decode(&raw)
}
