//! Bit addressing for [`ByteUint`].

use crate::{ByteUint, Limb};

impl ByteUint {
    /// Total number of bits in this value's width.
    pub fn bits(&self) -> usize {
        self.limbs.len() * Limb::BITS
    }

    /// Returns bit `index`, counting from 0 at the least significant bit.
    ///
    /// Runs in variable time with respect to `index`. Used by the
    /// square-and-multiply exponent scan.
    ///
    /// Panics if `index >= self.bits()`.
    pub fn bit_vartime(&self, index: usize) -> bool {
        assert!(index < self.bits(), "bit index out of range");
        let limb = self.limbs[self.limbs.len() - 1 - index / Limb::BITS];
        limb.0 >> (index % Limb::BITS) & 1 == 1
    }
}
