//! The decryption entry points.

use crate::{
    Error, Modulus,
    frame::{DecodedFrame, decode_frame},
};
use alloc::vec::Vec;

/// Decrypt a single frame of ciphertext under the given public modulus.
///
/// Pure: the ciphertext and modulus are borrowed for the duration of the
/// call, every intermediate value is call-local, and the same input always
/// produces the same output. Trailing bytes past the first frame are
/// ignored; [`decrypt_frames`] consumes them.
pub fn decrypt(ciphertext: &[u8], modulus: &Modulus) -> Result<DecodedFrame, Error> {
    decode_frame(ciphertext, modulus)
}

/// Decrypt a chain of frames covering the whole ciphertext buffer.
///
/// Each frame restarts its own accumulator. Errors abort at the offending
/// frame; earlier frames' output is discarded with the error.
pub fn decrypt_frames(ciphertext: &[u8], modulus: &Modulus) -> Result<Vec<DecodedFrame>, Error> {
    let mut frames = Vec::new();
    let mut cursor = ciphertext;

    while !cursor.is_empty() {
        let frame = decode_frame(cursor, modulus)?;
        cursor = &cursor[frame.consumed()..];
        frames.push(frame);
    }

    Ok(frames)
}
