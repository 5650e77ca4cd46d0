/// Failure modes of the codec, from bit-level reads up to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Not enough bits left in the buffer for the requested read
    OutOfData,
    /// The buffer does not start with the wire magic
    BadMagic,
    /// The header carries a wire version this build does not accept
    BadVersion(u32),
    /// A type tag that has no wire payload (userdata, none, unknown)
    UnsupportedType(u8),
    /// Table nesting beyond the codec's depth bound
    DepthLimit,
    /// Decompressed payload would exceed the working capacity
    Capacity { limit: usize },
    /// Compression failure
    Compress(String),
    /// Decompression failure
    Decompress(String),
    /// The transport text is not valid base64
    TextDecode(String),
}

pub type PackResult<T> = Result<T, PackError>;

impl std::fmt::Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::OutOfData => write!(f, "not enough data left in the buffer"),
            PackError::BadMagic => write!(f, "invalid wire magic"),
            PackError::BadVersion(version) => write!(f, "unsupported wire version: {}", version),
            PackError::UnsupportedType(tag) => write!(f, "unsupported type tag: {}", tag),
            PackError::DepthLimit => write!(f, "table nesting too deep"),
            PackError::Capacity { limit } => {
                write!(f, "decompressed payload exceeds {} bytes", limit)
            }
            PackError::Compress(msg) => write!(f, "compression failed: {}", msg),
            PackError::Decompress(msg) => write!(f, "decompression failed: {}", msg),
            PackError::TextDecode(msg) => write!(f, "base64 decode failed: {}", msg),
        }
    }
}

impl std::error::Error for PackError {}
