use serde::ser::{Error, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::lua_data::{LuaData, LuaTable};

impl Serialize for LuaData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LuaData::Nil => serializer.serialize_unit(),
            LuaData::Boolean(b) => serializer.serialize_bool(*b),
            LuaData::Number(n) => serializer.serialize_f32(*n),
            LuaData::Int32(i) => serializer.serialize_i32(*i),
            LuaData::Int16(i) => serializer.serialize_i16(*i),
            LuaData::Int8(i) => serializer.serialize_i8(*i),
            LuaData::String(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(S::Error::custom)?;
                serializer.serialize_str(text)
            }
            LuaData::Json(bytes) => {
                // Raw JSON is parsed once so it lands as structure, not a string.
                let value: serde_json::Value =
                    serde_json::from_slice(bytes).map_err(S::Error::custom)?;
                value.serialize(serializer)
            }
            LuaData::Table(table) => {
                if let Some(items) = array_items(table) {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                } else {
                    let mut map = serializer.serialize_map(Some(table.len()))?;
                    for (key, value) in table.iter() {
                        let key = object_key(key).map_err(S::Error::custom)?;
                        map.serialize_entry(&key, value)?;
                    }
                    map.end()
                }
            }
            other => Err(S::Error::custom(format!(
                "cannot represent {} in JSON",
                other.type_name()
            ))),
        }
    }
}

pub fn to_value(data: &LuaData) -> Result<serde_json::Value, String> {
    serde_json::to_value(data).map_err(|e| e.to_string())
}

pub fn to_string(data: &LuaData, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };

    result.map_err(|e| e.to_string())
}

/// Values in index order when the keys are exactly `Int32` 0..len-1.
fn array_items(table: &LuaTable) -> Option<Vec<&LuaData>> {
    if table.is_empty() {
        return None;
    }

    (0..table.len())
        .map(|i| table.get(&LuaData::Int32(i as i32)))
        .collect()
}

fn object_key(key: &LuaData) -> Result<String, String> {
    match key {
        LuaData::String(bytes) => String::from_utf8(bytes.clone())
            .map_err(|e| format!("string key is not UTF-8: {}", e)),
        LuaData::Int32(i) => Ok(itoa::Buffer::new().format(*i).to_owned()),
        LuaData::Int16(i) => Ok(itoa::Buffer::new().format(*i).to_owned()),
        LuaData::Int8(i) => Ok(itoa::Buffer::new().format(*i).to_owned()),
        other => Err(format!(
            "{} keys have no JSON object representation",
            other.type_name()
        )),
    }
}
