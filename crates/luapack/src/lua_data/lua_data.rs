use std::cmp::Ordering;
use std::fmt;

use super::LuaTable;

// Wire type tags
pub const TAG_NONE: u8 = 0;
pub const TAG_NIL: u8 = 1;
pub const TAG_BOOLEAN: u8 = 2;
pub const TAG_NUMBER: u8 = 3;
pub const TAG_STRING: u8 = 4;
pub const TAG_TABLE: u8 = 5;
pub const TAG_INT32: u8 = 6;
pub const TAG_INT16: u8 = 7;
pub const TAG_INT8: u8 = 8;
pub const TAG_JSON: u8 = 9;
pub const TAG_USERDATA: u8 = 100;
pub const TAG_UNKNOWN: u8 = 101;

/// A Lua-like datum.
///
/// Exactly one payload is live at a time; reassignment drops the previous
/// payload before the new one is installed. `String` and `Json` carry
/// arbitrary bytes (UTF-8 is not assumed), `Json` marking raw, unparsed JSON
/// text. `None` is the default empty state and never valid on the wire;
/// `Userdata` holds an opaque host type id and is never serializable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LuaData {
    #[default]
    None,
    Nil,
    Boolean(bool),
    Number(f32),
    String(Vec<u8>),
    Table(LuaTable),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    Json(Vec<u8>),
    Userdata(u32),
    Unknown,
}

impl LuaData {
    pub const fn nil() -> Self {
        LuaData::Nil
    }

    /// A raw-JSON value; the text is carried verbatim, never parsed.
    pub fn json(text: impl Into<Vec<u8>>) -> Self {
        LuaData::Json(text.into())
    }

    pub const fn tag(&self) -> u8 {
        match self {
            LuaData::None => TAG_NONE,
            LuaData::Nil => TAG_NIL,
            LuaData::Boolean(_) => TAG_BOOLEAN,
            LuaData::Number(_) => TAG_NUMBER,
            LuaData::String(_) => TAG_STRING,
            LuaData::Table(_) => TAG_TABLE,
            LuaData::Int32(_) => TAG_INT32,
            LuaData::Int16(_) => TAG_INT16,
            LuaData::Int8(_) => TAG_INT8,
            LuaData::Json(_) => TAG_JSON,
            LuaData::Userdata(_) => TAG_USERDATA,
            LuaData::Unknown => TAG_UNKNOWN,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            LuaData::None => "none",
            LuaData::Nil => "nil",
            LuaData::Boolean(_) => "boolean",
            LuaData::Number(_) => "number",
            LuaData::String(_) => "string",
            LuaData::Table(_) => "table",
            LuaData::Int32(_) => "int32",
            LuaData::Int16(_) => "int16",
            LuaData::Int8(_) => "int8",
            LuaData::Json(_) => "json",
            LuaData::Userdata(_) => "userdata",
            LuaData::Unknown => "unknown",
        }
    }

    pub const fn is_nil(&self) -> bool {
        matches!(self, LuaData::Nil)
    }

    /// Per-variant hash backing table-key ordering and host-map keying.
    ///
    /// Boolean hashes to its bit, numeric variants to their value (signed
    /// variants sign-extended, floats through their bit pattern), String and
    /// Json to their byte content. Nil, Table, Userdata, None and Unknown all
    /// hash to 0 and are not discriminated.
    pub fn data_hash(&self) -> u64 {
        match self {
            LuaData::Boolean(b) => *b as u64,
            LuaData::Number(n) => n.to_bits() as u64,
            LuaData::String(bytes) | LuaData::Json(bytes) => hash_bytes(bytes),
            LuaData::Int32(i) => *i as i64 as u64,
            LuaData::Int16(i) => *i as i64 as u64,
            LuaData::Int8(i) => *i as i64 as u64,
            _ => 0,
        }
    }

    /// Debug/display rendering, same shape the table `Display` recursion uses.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

/// Table-key ordering strategy: ascending `data_hash`.
///
/// Keys of non-discriminating variants (and hash-colliding keys of different
/// types) compare equal here; [`LuaTable`] keeps such keys distinct and falls
/// back to insertion order among them.
pub fn key_order(a: &LuaData, b: &LuaData) -> Ordering {
    a.data_hash().cmp(&b.data_hash())
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    use std::hash::BuildHasher;

    // Fixed seeds: the hash orders wire output, so it must not vary per process.
    ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
    .hash_one(bytes)
}

impl std::hash::Hash for LuaData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.data_hash());
    }
}

impl fmt::Display for LuaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaData::Nil => f.write_str("nil"),
            LuaData::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            LuaData::Number(n) => {
                if n.floor() == *n && n.abs() < 1e14 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            LuaData::String(bytes) => write!(f, "\"{}\"", String::from_utf8_lossy(bytes)),
            LuaData::Table(table) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "[{}] = {}", key, value)?;
                }
                f.write_str(" }")
            }
            LuaData::Int32(i) => f.write_str(itoa::Buffer::new().format(*i)),
            LuaData::Int16(i) => f.write_str(itoa::Buffer::new().format(*i)),
            LuaData::Int8(i) => f.write_str(itoa::Buffer::new().format(*i)),
            LuaData::Json(bytes) => write!(f, "<Json = \"{}\">", String::from_utf8_lossy(bytes)),
            other => write!(f, "UNKNOWN TYPE {}", other.tag()),
        }
    }
}

impl From<bool> for LuaData {
    fn from(b: bool) -> Self {
        LuaData::Boolean(b)
    }
}

impl From<f32> for LuaData {
    fn from(n: f32) -> Self {
        LuaData::Number(n)
    }
}

impl From<i32> for LuaData {
    fn from(i: i32) -> Self {
        LuaData::Int32(i)
    }
}

impl From<i16> for LuaData {
    fn from(i: i16) -> Self {
        LuaData::Int16(i)
    }
}

impl From<i8> for LuaData {
    fn from(i: i8) -> Self {
        LuaData::Int8(i)
    }
}

impl From<&str> for LuaData {
    fn from(s: &str) -> Self {
        LuaData::String(s.as_bytes().to_vec())
    }
}

impl From<String> for LuaData {
    fn from(s: String) -> Self {
        LuaData::String(s.into_bytes())
    }
}

impl From<Vec<u8>> for LuaData {
    fn from(bytes: Vec<u8>) -> Self {
        LuaData::String(bytes)
    }
}

impl From<LuaTable> for LuaData {
    fn from(table: LuaTable) -> Self {
        LuaData::Table(table)
    }
}
