//! Bit packing of code paths into bytes.
//!
//! Codes are written MSB-first: the first bit of the stream is the high bit
//! of the first byte. The final byte is completed with filler bits and the
//! filler count travels in the frame header.

use bitvec::prelude::*;
use huffpress_core::{Error, Result};

use crate::tree::{Bits, Code, CodeTable};

/// Largest filler count a valid frame can carry.
pub const MAX_PADDING: u8 = 7;

/// Packed code bits and their filler count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    /// Packed bytes, MSB-first.
    pub bytes: Vec<u8>,
    /// Filler bits appended to the last byte (0-7).
    pub padding: u8,
}

/// Concatenate the code of every byte in `data` and pad to a whole byte with
/// `filler_bit`.
pub fn pack(data: &[u8], codes: &CodeTable, filler_bit: bool) -> Result<PackedBits> {
    let mut bits = Code::with_capacity(data.len() * 2);

    for (offset, &byte) in data.iter().enumerate() {
        let code = codes.get(byte).ok_or_else(|| {
            Error::invalid_input(format!(
                "byte 0x{:02x} at offset {} has no code",
                byte, offset
            ))
        })?;
        bits.extend_from_bitslice(code);
    }

    let padding = (8 - bits.len() % 8) % 8;
    bits.resize(bits.len() + padding, filler_bit);

    Ok(PackedBits {
        bytes: bits.into_vec(),
        padding: padding as u8,
    })
}

/// View `packed` as a bit sequence with the trailing `padding` bits removed.
pub fn unpack(packed: &[u8], padding: u8) -> Result<&Bits> {
    if padding > MAX_PADDING {
        return Err(Error::malformed(format!(
            "padding count {} exceeds {}",
            padding, MAX_PADDING
        )));
    }

    let bits = packed.view_bits::<Msb0>();
    let len = bits.len().checked_sub(padding as usize).ok_or_else(|| {
        Error::malformed(format!(
            "padding count {} exceeds the {} packed bits",
            padding,
            bits.len()
        ))
    })?;

    Ok(&bits[..len])
}
