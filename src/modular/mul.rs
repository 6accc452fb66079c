//! Bit-serial modular multiplication.
//!
//! This is the multiplier the Lynx ROM runs at boot: a Blakley-style
//! interleaved double-and-reduce scan over the multiplier's bits. The
//! historical sources call it "Montgomery", but no residue-domain transform
//! is involved; the genuine Montgomery engine lives in
//! [`monty`](crate::modular::monty).

use super::reduce::{conditional_sub, conditional_sub_with_carry};
use crate::{ByteUint, Error, Limb, Modulus};

/// Computes `multiplicand * multiplier mod modulus`.
///
/// Both operands must match the modulus width and be below the modulus;
/// the first is checked up front, the second is the caller's contract and
/// any breach that leaves the result out of range surfaces as
/// [`Error::ReductionOverflow`].
///
/// The multiplier is scanned one bit at a time from the most significant
/// byte down, bit 7 to bit 0 within each byte. Per bit the partial result
/// is doubled, the multiplicand is added when the bit is set, and the
/// excess is removed by at most two conditional subtractions (a doubled
/// value needs one, a doubled-then-incremented value at most two). The
/// carry out of the add feeds the first subtraction: a doubled value plus
/// the multiplicand can reach three times the modulus, which overflows the
/// width for moduli above a third of it. The console's own loop dropped
/// that carry, which is sound for its key but not for every modulus this
/// contract admits, so the carry is reconciled here.
pub fn mul_mod(
    multiplicand: &ByteUint,
    multiplier: &ByteUint,
    modulus: &Modulus,
) -> Result<ByteUint, Error> {
    for operand in [multiplicand, multiplier] {
        if operand.len() != modulus.len() {
            return Err(Error::LengthMismatch {
                expected: modulus.len(),
                actual: operand.len(),
            });
        }
    }

    let mut result = ByteUint::zero_with_len(modulus.len());

    for limb in multiplier.as_limbs() {
        for bit in (0..Limb::BITS).rev() {
            result.double_assign();

            if limb.0 >> bit & 1 == 1 {
                let carry = result.carrying_add_assign(multiplicand);
                if conditional_sub_with_carry(&mut result, modulus, carry).into() {
                    conditional_sub(&mut result, modulus);
                }
            } else {
                conditional_sub(&mut result, modulus);
            }
        }
    }

    if result.cmp_vartime(modulus.as_uint()).is_lt() {
        Ok(result)
    } else {
        Err(Error::ReductionOverflow)
    }
}
