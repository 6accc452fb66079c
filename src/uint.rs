//! Heap-allocated fixed-width big unsigned integers.

mod add;
mod bits;
mod cmp;
mod ct;
pub(crate) mod encoding;
mod sub;

use crate::Limb;
use alloc::{boxed::Box, vec};
use core::fmt;
use subtle::Choice;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Fixed-precision heap-allocated big unsigned integer.
///
/// The width is chosen at runtime (one byte per limb) and never grows:
/// arithmetic wraps at the fixed width rather than extending it, matching
/// the Lynx ROM's register file.
///
/// Byte order follows the published key material: **index 0 is the most
/// significant byte**. Carries and borrows ripple from index `len - 1`
/// toward index 0. Every routine in this crate agrees on that convention;
/// wire-format blocks arrive reversed and are flipped on decode (see
/// [`ByteUint::from_le_slice`]).
#[derive(Clone, Default, Eq, PartialEq)]
pub struct ByteUint {
    /// Boxed slice of limbs, most significant first.
    pub(crate) limbs: Box<[Limb]>,
}

impl ByteUint {
    /// Get the value `0` with the given width in bytes.
    pub fn zero_with_len(len: usize) -> Self {
        Self {
            limbs: vec![Limb::ZERO; len].into(),
        }
    }

    /// Get the value `1` with the given width in bytes.
    ///
    /// Panics if `len` is zero.
    pub fn one_with_len(len: usize) -> Self {
        assert!(len > 0, "width too small");
        let mut ret = Self::zero_with_len(len);
        ret.limbs[len - 1] = Limb::ONE;
        ret
    }

    /// Clone a limb slice into an owned value, most significant first.
    pub(crate) fn from_limbs(limbs: &[Limb]) -> Self {
        Self {
            limbs: limbs.into(),
        }
    }

    /// Is this [`ByteUint`] equal to zero?
    pub fn is_zero(&self) -> Choice {
        self.limbs
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.is_zero())
    }

    /// Get the width of this [`ByteUint`] in bytes.
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Is this [`ByteUint`] zero bytes wide?
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Borrow the limbs of this [`ByteUint`], most significant first.
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_ref()
    }

    /// Borrow the limbs of this [`ByteUint`] mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self.limbs.as_mut()
    }

    /// Convert this [`ByteUint`] into its inner limbs.
    pub fn into_limbs(self) -> Box<[Limb]> {
        self.limbs
    }
}

impl fmt::Debug for ByteUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteUint(0x{self:X})")
    }
}

impl fmt::Display for ByteUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for ByteUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }

        for limb in self.limbs.iter() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for ByteUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }

        for limb in self.limbs.iter() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ByteUint {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::ByteUint;
    use alloc::format;

    #[test]
    fn one_sits_in_the_least_significant_byte() {
        let one = ByteUint::one_with_len(3);
        assert_eq!(one.as_limbs()[2].0, 1);
        assert_eq!(format!("{one:X}"), "000001");
    }

    #[test]
    fn zero_is_zero() {
        assert!(bool::from(ByteUint::zero_with_len(5).is_zero()));
        assert!(!bool::from(ByteUint::one_with_len(5).is_zero()));
    }
}
