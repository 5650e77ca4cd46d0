/// Serde conversion support for Lua-like values
///
/// Maps a `LuaData` tree onto `serde_json::Value` and back. Tables with
/// sequential `Int32` keys starting at 0 become JSON arrays, other tables
/// become objects; `Json` payloads pass through as raw JSON text.
mod deserializer;
mod serializer;

pub use deserializer::{from_str as deserialize_from_json_str, from_value as deserialize_from_json};
pub use serializer::{to_string as serialize_to_json_string, to_value as serialize_to_json};

use crate::lua_data::LuaData;

/// Convert a Lua value to a `serde_json::Value`
pub fn lua_to_json(data: &LuaData) -> Result<serde_json::Value, String> {
    serialize_to_json(data)
}

/// Convert a Lua value to a JSON string
pub fn lua_to_json_string(data: &LuaData, pretty: bool) -> Result<String, String> {
    serialize_to_json_string(data, pretty)
}

/// Convert a `serde_json::Value` to a Lua value
pub fn json_to_lua(value: &serde_json::Value) -> Result<LuaData, String> {
    deserialize_from_json(value)
}

/// Convert a JSON string to a Lua value
pub fn json_string_to_lua(text: &str) -> Result<LuaData, String> {
    deserialize_from_json_str(text)
}
