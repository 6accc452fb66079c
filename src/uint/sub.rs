//! [`ByteUint`] subtraction.

use crate::{ByteUint, Limb};

impl ByteUint {
    /// Computes `self - rhs`, returning the (wrapped) difference along with
    /// the final borrow, mask-encoded as in [`Limb::sbb`].
    ///
    /// A zero borrow means `self >= rhs` and the difference is exact.
    #[must_use]
    pub fn borrowing_sub(&self, rhs: &Self) -> (Self, Limb) {
        debug_assert_eq!(self.len(), rhs.len(), "width mismatch");

        let mut diff = Self::zero_with_len(self.len());
        let mut borrow = Limb::ZERO;
        for i in (0..self.limbs.len()).rev() {
            let (d, b) = self.limbs[i].sbb(rhs.limbs[i], borrow);
            diff.limbs[i] = d;
            borrow = b;
        }

        (diff, borrow)
    }
}
