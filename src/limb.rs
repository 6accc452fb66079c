//! The byte-sized unit all big-integer values are built from.
//!
//! The Lynx boot ROM works a byte at a time, so unlike a word-limbed bignum
//! library the "limb" here is a single `u8`. Carries, borrows and the
//! multiply-accumulate step are exact in 16 bits.

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// One byte of a big integer.
///
/// Borrows returned by [`Limb::sbb`] are mask-encoded: `0x00` for "no
/// borrow", `0xFF` for "borrow". Carries returned by [`Limb::carrying_add`]
/// and [`Limb::mac`] are plain counts.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Limb(pub u8);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(u8::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: usize = 8;

    /// Index of the highest bit in a [`Limb`].
    pub const HI_BIT: usize = Self::BITS - 1;

    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let sum = self.0 as u16 + rhs.0 as u16 + carry.0 as u16;
        (Limb(sum as u8), Limb((sum >> Self::BITS) as u8))
    }

    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow. The borrow is mask-encoded (`0x00` or `0xFF`).
    #[inline(always)]
    #[must_use]
    pub const fn sbb(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let rhs = rhs.0 as u16 + (borrow.0 >> Self::HI_BIT) as u16;
        let res = (self.0 as u16).wrapping_sub(rhs);
        (Limb(res as u8), Limb((res >> Self::BITS) as u8))
    }

    /// Computes `self + b * c + carry`, returning the low byte along with
    /// the new carry.
    ///
    /// `0xFF + 0xFF * 0xFF + 0xFF` is exactly `u16::MAX`, so the
    /// accumulation cannot overflow its intermediate.
    #[inline(always)]
    #[must_use]
    pub const fn mac(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let t = self.0 as u16 + b.0 as u16 * c.0 as u16 + carry.0 as u16;
        (Limb(t as u8), Limb((t >> Self::BITS) as u8))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Is this limb equal to [`Limb::ZERO`]?
    #[must_use]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Interpret a mask-encoded borrow as a [`Choice`]: truthy when a borrow
    /// occurred.
    #[inline]
    #[must_use]
    pub(crate) fn borrow_to_choice(self) -> Choice {
        Choice::from(self.0 & 1)
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Limb(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl From<u8> for Limb {
    fn from(n: u8) -> Limb {
        Limb(n)
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl fmt::UpperHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Limb {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
