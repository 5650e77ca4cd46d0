// Tests for the compression + base64 transport boundary
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::PackError;
use crate::lua_data::LuaData;
use crate::transport::{MAX_DECODED_LEN, compress, decompress, deserialize, serialize};

#[test]
fn test_compress_round_trip() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 7) as u8).collect();
    let compressed = compress(&data).unwrap();
    assert_eq!(decompress(&compressed, MAX_DECODED_LEN).unwrap(), data);
}

#[test]
fn test_decompress_rejects_garbage() {
    assert!(matches!(
        decompress(b"definitely not gzip", MAX_DECODED_LEN),
        Err(PackError::Decompress(_))
    ));
}

#[test]
fn test_decompress_enforces_capacity() {
    let oversized = vec![0u8; MAX_DECODED_LEN + 1];
    let compressed = compress(&oversized).unwrap();

    assert_eq!(
        decompress(&compressed, MAX_DECODED_LEN).unwrap_err(),
        PackError::Capacity {
            limit: MAX_DECODED_LEN
        }
    );

    // Exactly at the limit is fine
    let fitting = vec![0u8; MAX_DECODED_LEN];
    let compressed = compress(&fitting).unwrap();
    assert_eq!(decompress(&compressed, MAX_DECODED_LEN).unwrap(), fitting);
}

#[test]
fn test_serialize_emits_standard_base64() {
    let text = serialize(&LuaData::from("payload")).unwrap();
    assert!(STANDARD.decode(&text).is_ok());
}

#[test]
fn test_deserialize_rejects_bad_base64() {
    assert!(matches!(
        deserialize("not*base64*at*all"),
        Err(PackError::TextDecode(_))
    ));
}

#[test]
fn test_deserialize_rejects_non_gzip_payload() {
    let text = STANDARD.encode(b"random bytes, not compressed");
    assert!(matches!(deserialize(&text), Err(PackError::Decompress(_))));
}

#[test]
fn test_oversized_wire_buffer_fails_on_decode() {
    // Serialization has no size bound; the capacity check guards decode
    let value = LuaData::String(vec![0x41; MAX_DECODED_LEN]);
    let text = serialize(&value).unwrap();

    assert_eq!(
        deserialize(&text).unwrap_err(),
        PackError::Capacity {
            limit: MAX_DECODED_LEN
        }
    );
}
