//! The fixed-exponent shortcut.
//!
//! The Lynx "RSA" public exponent is 3, so decrypting a block never needs a
//! general exponentiation: two multiplications raise it to the third power.

use super::mul::mul_mod;
use crate::{ByteUint, Error, Modulus};

/// Computes `x³ mod modulus` via two [`mul_mod`] calls.
///
/// The squared value is the multiplicand of the second call and the
/// original the multiplier, matching the order the ROM chains them in.
/// For every `x` below the modulus this equals
/// [`pow_mod(x, 3, modulus)`](crate::modular::pow_mod), which is the
/// property that justifies the shortcut.
pub fn cube(x: &ByteUint, modulus: &Modulus) -> Result<ByteUint, Error> {
    let square = mul_mod(x, x, modulus)?;
    mul_mod(&square, x, modulus)
}
