//! The encrypted-frame wire format.
//!
//! A frame is one header byte followed by a run of encrypted blocks that
//! share a single running accumulator. The header byte encodes the block
//! count as `256 - header`, so `0xFF` announces one block and `0x00` the
//! maximum run of 256.
//!
//! Each block carries `L` wire bytes, least significant first (the
//! reverse of the arithmetic convention), and decodes to `L - 1` plaintext
//! bytes: the block is cubed modulo the public key, and every cubed byte
//! except the most significant is folded into the accumulator, whose value
//! after each fold is the next output byte.

use crate::{ByteUint, Error, Modulus, modular::cube};
use alloc::vec::Vec;

/// Number of blocks announced by a frame header byte, in `1..=256`.
pub fn block_count(header: u8) -> usize {
    256 - header as usize
}

/// The decoded contents of one frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedFrame {
    plaintext: Vec<u8>,
    accumulator: u8,
    consumed: usize,
}

impl DecodedFrame {
    /// The decoded plaintext, `block_count * (L - 1)` bytes.
    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    /// The accumulator value after the last block.
    ///
    /// A well-formed frame decoded under the right key leaves this at
    /// zero; anything else usually means a key/modulus mismatch.
    pub fn accumulator(&self) -> u8 {
        self.accumulator
    }

    /// Number of ciphertext bytes this frame occupied, including its
    /// header. Chained frames continue at this offset.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Extract the plaintext, requiring the terminal accumulator check to
    /// pass.
    pub fn into_verified(self) -> Result<Vec<u8>, Error> {
        if self.accumulator == 0 {
            Ok(self.plaintext)
        } else {
            Err(Error::AccumulatorMismatch(self.accumulator))
        }
    }
}

/// Decode a single frame from the start of `input`.
///
/// The input must hold the full block run its header announces; a shorter
/// buffer is rejected as [`Error::Truncated`] before any block is decoded.
/// Bytes past the end of the frame are ignored (see
/// [`DecodedFrame::consumed`]).
pub fn decode_frame(input: &[u8], modulus: &Modulus) -> Result<DecodedFrame, Error> {
    let len = modulus.len();

    let (&header, mut blocks) = input.split_first().ok_or(Error::Truncated {
        needed: 1,
        actual: 0,
    })?;

    let count = block_count(header);
    let needed = 1 + count * len;
    if input.len() < needed {
        return Err(Error::Truncated {
            needed,
            actual: input.len(),
        });
    }

    let mut plaintext = Vec::with_capacity(count * (len - 1));
    let mut accumulator = 0u8;

    for _ in 0..count {
        let (wire, rest) = blocks.split_at(len);
        blocks = rest;

        let block = ByteUint::from_le_slice(wire);
        let cubed = cube(&block, modulus)?;

        // Walk the cubed block from its low end toward its high end; the
        // most significant byte feeds nothing and is never emitted.
        for limb in cubed.as_limbs()[1..].iter().rev() {
            accumulator = accumulator.wrapping_add(limb.0);
            plaintext.push(accumulator);
        }
    }

    Ok(DecodedFrame {
        plaintext,
        accumulator,
        consumed: needed,
    })
}

/// Advisory sanity check for a decoded wire block.
///
/// Returns `false` for a block whose three most significant bytes are all
/// zero or exceed the modulus's leading three bytes, the two conditions
/// the original loader treated as evidence of a key/modulus mismatch. The
/// decode path never calls this; it exists for diagnostics and regression
/// tests.
pub fn check_block(block: &ByteUint, modulus: &Modulus) -> bool {
    let prefix = |value: &ByteUint| {
        value
            .as_limbs()
            .iter()
            .take(3)
            .fold(0u32, |acc, limb| acc << 8 | limb.0 as u32)
    };

    if block.len() != modulus.len() || block.len() < 3 {
        return false;
    }

    let block_prefix = prefix(block);
    block_prefix != 0 && block_prefix <= prefix(modulus.as_uint())
}
