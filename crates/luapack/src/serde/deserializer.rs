use serde_json::Value;

use crate::lua_data::{LuaData, LuaTable};

/// Maps a JSON tree onto a Lua value. Integers that fit an `i32` become
/// `Int32`, every other number becomes `Number`; arrays become tables keyed
/// `Int32` 0..len-1.
pub fn from_value(value: &Value) -> Result<LuaData, String> {
    match value {
        Value::Null => Ok(LuaData::Nil),
        Value::Bool(b) => Ok(LuaData::Boolean(*b)),
        Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                if let Ok(small) = i32::try_from(i) {
                    return Ok(LuaData::Int32(small));
                }
            }

            number
                .as_f64()
                .map(|f| LuaData::Number(f as f32))
                .ok_or_else(|| format!("number {} has no Lua representation", number))
        }
        Value::String(s) => Ok(LuaData::from(s.as_str())),
        Value::Array(items) => {
            let mut table = LuaTable::new();
            for (index, item) in items.iter().enumerate() {
                table.insert(LuaData::Int32(index as i32), from_value(item)?);
            }

            Ok(LuaData::Table(table))
        }
        Value::Object(map) => {
            let mut table = LuaTable::new();
            for (key, item) in map {
                table.insert(LuaData::from(key.as_str()), from_value(item)?);
            }

            Ok(LuaData::Table(table))
        }
    }
}

pub fn from_str(text: &str) -> Result<LuaData, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    from_value(&value)
}
