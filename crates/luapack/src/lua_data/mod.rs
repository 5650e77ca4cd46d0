// Lua-like value model: tagged enum + hash-ordered table
mod lua_data;
mod lua_table;

pub use lua_data::{
    LuaData, TAG_BOOLEAN, TAG_INT8, TAG_INT16, TAG_INT32, TAG_JSON, TAG_NIL, TAG_NONE, TAG_NUMBER,
    TAG_STRING, TAG_TABLE, TAG_UNKNOWN, TAG_USERDATA, key_order,
};
pub use lua_table::LuaTable;
