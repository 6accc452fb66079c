//! [`ByteUint`] addition and doubling.

use crate::{ByteUint, Limb};

impl ByteUint {
    /// Ripple-carry addition in place, returning the carry out of the most
    /// significant byte.
    pub fn carrying_add_assign(&mut self, rhs: &Self) -> Limb {
        debug_assert_eq!(self.len(), rhs.len(), "width mismatch");

        let mut carry = Limb::ZERO;
        for i in (0..self.limbs.len()).rev() {
            let (sum, c) = self.limbs[i].carrying_add(rhs.limbs[i], carry);
            self.limbs[i] = sum;
            carry = c;
        }
        carry
    }

    /// Ripple-carry addition in place; a carry out of the most significant
    /// byte is silently dropped.
    ///
    /// Safe only when both values are below a modulus whose top bit is
    /// clear, so the sum fits the width. Callers must not feed this
    /// unconstrained values.
    pub fn wrapping_add_assign(&mut self, rhs: &Self) {
        let _ = self.carrying_add_assign(rhs);
    }

    /// Multiply by 2 in place, carry rippling from the least significant
    /// byte upward.
    ///
    /// No overflow checking: the caller must keep the value below a modulus
    /// whose top bit is clear, in which case the doubled value still fits
    /// the width. Violating that precondition is unchecked here.
    pub fn double_assign(&mut self) {
        let mut carry = Limb::ZERO;
        for i in (0..self.limbs.len()).rev() {
            let limb = self.limbs[i];
            let (sum, c) = limb.carrying_add(limb, carry);
            self.limbs[i] = sum;
            carry = c;
        }
        debug_assert_eq!(carry, Limb::ZERO, "doubling overflowed the width");
    }
}
