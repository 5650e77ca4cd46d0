// Wire grammar: magic/version header, then one tagged value, depth-first.
use crate::bit_stream::{BitReader, BitWriter};
use crate::error::{PackError, PackResult};
use crate::lua_data::{
    LuaData, LuaTable, TAG_BOOLEAN, TAG_INT8, TAG_INT16, TAG_INT32, TAG_JSON, TAG_NIL, TAG_NUMBER,
    TAG_STRING, TAG_TABLE, TAG_USERDATA,
};

/// Ordered magic bytes opening every buffer; compared byte-by-byte.
pub const WIRE_MAGIC: [u8; 3] = *b"LUA";
/// The only accepted format version.
pub const WIRE_VERSION: u32 = 1;
/// Maximum table nesting on either path.
pub const MAX_DEPTH: usize = 128;

/// Encodes a value tree into the raw (uncompressed) wire bytes.
pub fn encode(data: &LuaData) -> PackResult<Vec<u8>> {
    let mut writer = BitWriter::new();

    writer.write_bits(&WIRE_MAGIC, WIRE_MAGIC.len() * 8, false);
    writer.write_u32(WIRE_VERSION, true);

    encode_value(&mut writer, data, 0)?;

    Ok(writer.into_bytes())
}

/// Decodes one value tree from raw wire bytes. Trailing bits are ignored.
pub fn decode(bytes: &[u8]) -> PackResult<LuaData> {
    let mut reader = BitReader::new(bytes);

    decode_header(&mut reader)?;
    decode_value(&mut reader, 0)
}

fn encode_value(writer: &mut BitWriter, data: &LuaData, depth: usize) -> PackResult<()> {
    if depth > MAX_DEPTH {
        return Err(PackError::DepthLimit);
    }

    writer.write_u8(data.tag(), false);

    match data {
        LuaData::Nil => {}
        LuaData::Boolean(b) => writer.write_bit(*b),
        LuaData::Number(n) => writer.write_f32(*n, true),
        LuaData::String(bytes) | LuaData::Json(bytes) => {
            writer.write_u32(bytes.len() as u32, true);
            writer.align_forward();
            writer.write_bits(bytes, bytes.len() * 8, false);
        }
        LuaData::Table(table) => {
            writer.write_u32(table.len() as u32, true);
            // Only the key/value form is ever produced.
            writer.write_bit(false);

            for (key, value) in table.iter() {
                encode_value(writer, key, depth + 1)?;
                encode_value(writer, value, depth + 1)?;
            }
        }
        LuaData::Int32(i) => writer.write_i32(*i, true),
        LuaData::Int16(i) => writer.write_i16(*i, true),
        LuaData::Int8(i) => writer.write_i8(*i, true),
        LuaData::Userdata(_) | LuaData::None | LuaData::Unknown => {
            tracing::warn!(tag = data.tag(), "type has no wire representation");
            return Err(PackError::UnsupportedType(data.tag()));
        }
    }

    Ok(())
}

fn decode_header(reader: &mut BitReader) -> PackResult<()> {
    let mut magic = [0u8; 3];
    let bit_count = magic.len() * 8;
    reader.read_bits_into(&mut magic, bit_count, false)?;
    if magic != WIRE_MAGIC {
        tracing::warn!("invalid wire magic");
        return Err(PackError::BadMagic);
    }

    let version = reader.read_u32(true)?;
    if version != WIRE_VERSION {
        tracing::warn!(version, "unsupported wire version");
        return Err(PackError::BadVersion(version));
    }

    Ok(())
}

fn decode_value(reader: &mut BitReader, depth: usize) -> PackResult<LuaData> {
    if depth > MAX_DEPTH {
        return Err(PackError::DepthLimit);
    }

    let tag = reader.read_u8(false)?;
    match tag {
        TAG_NIL => Ok(LuaData::Nil),
        TAG_BOOLEAN => Ok(LuaData::Boolean(reader.read_bit()?)),
        TAG_NUMBER => Ok(LuaData::Number(reader.read_f32(true)?)),
        TAG_STRING => Ok(LuaData::String(decode_payload_bytes(reader)?)),
        TAG_JSON => Ok(LuaData::Json(decode_payload_bytes(reader)?)),
        TAG_TABLE => {
            let count = reader.read_u32(true)?;
            let is_array = reader.read_bit()?;

            let mut table = LuaTable::new();
            if is_array {
                // Reserved item-offset field, read and discarded.
                let _ = reader.read_u32(true)?;

                for index in 0..count {
                    let value = decode_value(reader, depth + 1)?;
                    table.insert(LuaData::Int32(index as i32), value);
                }
            } else {
                for _ in 0..count {
                    let key = decode_value(reader, depth + 1)?;
                    let value = decode_value(reader, depth + 1)?;
                    table.insert(key, value);
                }
            }

            Ok(LuaData::Table(table))
        }
        TAG_INT32 => Ok(LuaData::Int32(reader.read_i32(true)?)),
        TAG_INT16 => Ok(LuaData::Int16(reader.read_i16(true)?)),
        TAG_INT8 => Ok(LuaData::Int8(reader.read_i8(true)?)),
        TAG_USERDATA => {
            tracing::warn!("userdata payloads are not implemented");
            Err(PackError::UnsupportedType(TAG_USERDATA))
        }
        other => Err(PackError::UnsupportedType(other)),
    }
}

fn decode_payload_bytes(reader: &mut BitReader) -> PackResult<Vec<u8>> {
    let len = reader.read_u32(true)? as usize;
    reader.align_forward();

    // Zero-bit reads fail at the cursor, so skip them for empty payloads.
    if len == 0 {
        return Ok(Vec::new());
    }

    reader.read_bits(len * 8, false)
}
