use crate::error::{PackError, PackResult};

/// Sequential bit-level reader over a borrowed byte buffer.
///
/// Multi-bit reads assemble output bytes left-justified; a trailing partial
/// byte can optionally be shifted into the low bits (`align_right`).
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: usize,
    bit_pos: usize,
}

macro_rules! impl_read_typed {
    ($($fn_name:ident => $ty:ty),* $(,)?) => {
        $(
            /// Reads a fixed-width value, little-endian unless `big_endian` is set.
            pub fn $fn_name(&mut self, big_endian: bool) -> PackResult<$ty> {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                let bit_count = buf.len() * 8;
                self.read_bits_into(&mut buf, bit_count, false)?;
                Ok(if big_endian {
                    <$ty>::from_be_bytes(buf)
                } else {
                    <$ty>::from_le_bytes(buf)
                })
            }
        )*
    };
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_len: data.len() * 8,
            bit_pos: 0,
        }
    }

    /// True iff `bit_count` more bits can be read from the current position.
    pub fn has_bits(&self, bit_count: usize) -> bool {
        self.bit_pos + bit_count <= self.bit_len
    }

    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    fn bit_at(&self, bit_pos: usize) -> bool {
        (self.data[bit_pos >> 3] >> (7 - (bit_pos & 7))) & 1 != 0
    }

    /// Reads a single bit and advances by one.
    pub fn read_bit(&mut self) -> PackResult<bool> {
        if !self.has_bits(1) {
            return Err(PackError::OutOfData);
        }

        let bit = self.bit_at(self.bit_pos);
        self.bit_pos += 1;

        Ok(bit)
    }

    /// Reads `bit_count` bits into a fresh buffer of `ceil(bit_count / 8)` bytes.
    pub fn read_bits(&mut self, bit_count: usize, align_right: bool) -> PackResult<Vec<u8>> {
        let mut out = vec![0u8; bit_count.div_ceil(8)];
        self.read_bits_into(&mut out, bit_count, align_right)?;

        Ok(out)
    }

    /// Reads `bit_count` bits into `out`, which must hold `ceil(bit_count / 8)` bytes.
    ///
    /// Fails without consuming anything when `bit_count` is zero or the buffer
    /// runs short. On the general (unaligned) path each output byte is OR-built
    /// from the tail of one source byte and the head of the next; a trailing
    /// partial byte stays left-justified unless `align_right` shifts it down.
    pub fn read_bits_into(
        &mut self,
        out: &mut [u8],
        bit_count: usize,
        align_right: bool,
    ) -> PackResult<()> {
        if bit_count == 0 || !self.has_bits(bit_count) {
            return Err(PackError::OutOfData);
        }
        debug_assert!(out.len() >= bit_count.div_ceil(8));

        let aligned_offset = self.bit_pos & 7;

        // Fast path: byte-aligned source and a whole number of bytes.
        if aligned_offset == 0 && bit_count & 7 == 0 {
            let start = self.bit_pos >> 3;
            out[..bit_count >> 3].copy_from_slice(&self.data[start..start + (bit_count >> 3)]);
            self.bit_pos += bit_count;
            return Ok(());
        }

        for byte in out.iter_mut() {
            *byte = 0;
        }

        let neg_offset = 8 - aligned_offset;
        let mut remaining = bit_count;
        let mut out_idx = 0;

        loop {
            let read_byte = self.bit_pos >> 3;

            out[out_idx] |= self.data[read_byte] << aligned_offset;
            if aligned_offset != 0 && remaining > neg_offset {
                out[out_idx] |= self.data[read_byte + 1] >> neg_offset;
            }

            if remaining >= 8 {
                remaining -= 8;
                self.bit_pos += 8;
                out_idx += 1;
                if remaining == 0 {
                    break;
                }
                continue;
            }

            if align_right {
                out[out_idx] >>= 8 - remaining;
            }

            self.bit_pos += remaining;
            break;
        }

        Ok(())
    }

    /// Advances to the next byte boundary; no-op when already aligned.
    pub fn align_forward(&mut self) {
        let offset = self.bit_pos & 7;
        if offset != 0 {
            self.bit_pos += 8 - offset;
        }
    }

    impl_read_typed! {
        read_u8 => u8,
        read_i8 => i8,
        read_u16 => u16,
        read_i16 => i16,
        read_u32 => u32,
        read_i32 => i32,
        read_f32 => f32,
    }
}
