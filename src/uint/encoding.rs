//! Decoding/encoding between [`ByteUint`] and byte or hex representations.
//!
//! The key-file loaders and dump tools that surround the decryption core
//! exchange plain byte buffers; these conversions are their interface.

use crate::{ByteUint, Limb};
use alloc::vec::Vec;

impl ByteUint {
    /// Create a new [`ByteUint`] from big-endian bytes (most significant
    /// first), the order key constants are published in.
    ///
    /// The width of the result is `bytes.len()`.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self {
            limbs: bytes.iter().copied().map(Limb).collect(),
        }
    }

    /// Create a new [`ByteUint`] from little-endian bytes (least significant
    /// first), the order encrypted blocks appear in on the wire.
    ///
    /// The width of the result is `bytes.len()`.
    pub fn from_le_slice(bytes: &[u8]) -> Self {
        Self {
            limbs: bytes.iter().rev().copied().map(Limb).collect(),
        }
    }

    /// Create a new [`ByteUint`] from a big-endian hex string.
    ///
    /// # Panics
    /// If the hex is malformed or has an odd number of digits.
    pub fn from_be_hex(hex: &str) -> Self {
        let digits = hex.as_bytes();
        assert!(digits.len() % 2 == 0, "hex string has an odd length");

        let limbs = digits
            .chunks(2)
            .map(|pair| Limb(decode_hex_byte([pair[0], pair[1]])))
            .collect();
        Self { limbs }
    }

    /// Serialize this [`ByteUint`] as big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.limbs.iter().map(|limb| limb.0).collect()
    }

    /// Serialize this [`ByteUint`] as little-endian (wire-order) bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.limbs.iter().rev().map(|limb| limb.0).collect()
    }
}

/// Decode a single nibble of upper/lowercase hex.
///
/// Panics on anything that is not a hex digit.
fn decode_nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// Decode a single byte from two hex digits.
fn decode_hex_byte(bytes: [u8; 2]) -> u8 {
    decode_nibble(bytes[0]) << 4 | decode_nibble(bytes[1])
}

#[cfg(test)]
mod tests {
    use super::ByteUint;

    #[test]
    fn be_and_le_are_reverses() {
        let be = ByteUint::from_be_slice(&[0x35, 0xB5, 0xA3]);
        let le = ByteUint::from_le_slice(&[0xA3, 0xB5, 0x35]);
        assert_eq!(be, le);
        assert_eq!(be.to_be_bytes(), &[0x35, 0xB5, 0xA3]);
        assert_eq!(be.to_le_bytes(), &[0xA3, 0xB5, 0x35]);
    }

    #[test]
    fn hex_round_trip() {
        let x = ByteUint::from_be_hex("35b5A394");
        assert_eq!(x.to_be_bytes(), &[0x35, 0xB5, 0xA3, 0x94]);
    }

    #[test]
    #[should_panic(expected = "invalid hex digit")]
    fn malformed_hex_panics() {
        let _ = ByteUint::from_be_hex("zz");
    }
}
