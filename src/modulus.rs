//! Wrapper type for validated moduli.

use crate::{ByteUint, Error, Limb};
use core::fmt;

/// A public modulus accepted by the reduction engines.
///
/// Construction enforces the two preconditions every modular routine in
/// this crate leans on, so they are checked exactly once:
///
/// - the value is non-zero;
/// - the most significant bit of the most significant byte is clear, which
///   bounds every intermediate at twice the modulus and lets doubling and
///   addition run without overflow checks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Modulus(ByteUint);

impl Modulus {
    /// Validate `value` as a modulus.
    ///
    /// Returns [`Error::ZeroModulus`] or [`Error::TopBitSet`] if the
    /// invariants do not hold; no arithmetic runs on a rejected value.
    pub fn new(value: ByteUint) -> Result<Self, Error> {
        if value.is_empty() || value.is_zero().into() {
            return Err(Error::ZeroModulus);
        }

        if value.as_limbs()[0].0 >> Limb::HI_BIT != 0 {
            return Err(Error::TopBitSet);
        }

        Ok(Self(value))
    }

    /// The width of the modulus in bytes; every operand must match it.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the least significant bit is set.
    ///
    /// The Montgomery engine additionally requires an odd modulus.
    pub fn is_odd(&self) -> bool {
        self.0.as_limbs()[self.len() - 1].0 & 1 == 1
    }

    /// Access the inner value.
    pub fn as_uint(&self) -> &ByteUint {
        &self.0
    }
}

impl AsRef<ByteUint> for Modulus {
    fn as_ref(&self) -> &ByteUint {
        &self.0
    }
}

impl TryFrom<ByteUint> for Modulus {
    type Error = Error;

    fn try_from(value: ByteUint) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
