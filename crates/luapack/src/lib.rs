// Compact binary codec for Lua-like values
// Bit-level wire format with a gzip + base64 transport layer

#[cfg(test)]
mod test;

pub mod bit_stream;
pub mod error;
pub mod lua_data;
pub mod transport;
pub mod wire;

#[cfg(feature = "serde")]
pub mod serde;

pub use bit_stream::{BitReader, BitWriter};
pub use error::{PackError, PackResult};
pub use lua_data::{LuaData, LuaTable};
pub use transport::{MAX_DECODED_LEN, deserialize, serialize};
