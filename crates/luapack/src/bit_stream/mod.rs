// Bit-granular cursors over byte buffers
// Bits are addressed MSB-first: bit 0 is the high bit of the first byte.
mod bit_reader;
mod bit_writer;

pub use bit_reader::BitReader;
pub use bit_writer::BitWriter;
