//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use hex_literal::hex;
use lynx_crypt::{ByteUint, Modulus};
use num_bigint::BigUint;

/// Width of the historical key, in bytes.
pub const LYNX_KEY_LEN: usize = 51;

/// The public modulus from the Lynx ROM, most significant byte first.
pub const LYNX_PUBLIC_MOD: [u8; LYNX_KEY_LEN] = hex!(
    "35b5a3942806d8a22695d771b23cfd56"
    "1c4a19b6a3b02600365a306e3c4d6338"
    "1bd41c136489364cf2ba2a58f4fee1fd"
    "ac7e79"
);

/// The private exponent recovered by xor'ing the three Amiga keyfiles
/// together; inverts the public exponent of 3.
pub const LYNX_PRIVATE_EXP: [u8; LYNX_KEY_LEN] = hex!(
    "23ce6d0d7004906c19b93a4bcc28a8e4"
    "12dc11246d2019557987ab5ca818a3d3"
    "c8e3276d4270cb8021d6bda4296d47b1"
    "e5e2a3"
);

/// The historical public modulus as a validated [`Modulus`].
pub fn lynx_modulus() -> Modulus {
    Modulus::new(ByteUint::from_be_slice(&LYNX_PUBLIC_MOD)).expect("ROM modulus is valid")
}

/// `ByteUint` to `num_bigint::BigUint`.
pub fn to_biguint(uint: &ByteUint) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

/// `num_bigint::BigUint` to a `ByteUint` of the given width.
///
/// Panics if the value does not fit.
pub fn from_biguint(value: &BigUint, len: usize) -> ByteUint {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= len, "value wider than {len} bytes");

    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(&bytes);
    ByteUint::from_be_slice(&padded)
}
