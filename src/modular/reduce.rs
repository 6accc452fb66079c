//! The canonical modulus-correction primitive.
//!
//! The historical sources carried two renditions of this operation (a plain
//! "subtract if it does not underflow" and a separate "Adjust"); behaviour
//! is identical, so one implementation serves every caller here.

use crate::{ByteUint, Limb, Modulus};
use subtle::Choice;

/// Subtract the modulus from `value` if `value >= modulus`.
///
/// The difference is computed into a scratch buffer and committed over
/// `value` only when the final borrow reports no underflow; otherwise the
/// scratch is discarded and `value` is untouched. Returns a truthy
/// [`Choice`] when a subtraction occurred.
///
/// Applied to a value below `2 * modulus` this is a full reduction; callers
/// that may sit below `3 * modulus` (an add on top of a double) apply it a
/// second time when the first application reports a subtraction.
pub fn conditional_sub(value: &mut ByteUint, modulus: &Modulus) -> Choice {
    conditional_sub_with_carry(value, modulus, Limb::ZERO)
}

/// [`conditional_sub`] for a value whose width overflowed into `carry`.
///
/// The real value is `value + carry * 256^L`, which always exceeds the
/// modulus when `carry` is non-zero, so the subtraction is committed
/// whenever the carry is set or the in-width difference did not borrow.
/// The committed wrapped difference is exact as long as the real value sits
/// below `modulus + 256^L`.
pub(crate) fn conditional_sub_with_carry(
    value: &mut ByteUint,
    modulus: &Modulus,
    carry: Limb,
) -> Choice {
    debug_assert_eq!(value.len(), modulus.len(), "width mismatch");

    let (diff, borrow) = value.borrowing_sub(modulus.as_uint());
    let subtracted = !carry.is_zero() | !borrow.borrow_to_choice();
    value.ct_assign(&diff, subtracted);
    subtracted
}
