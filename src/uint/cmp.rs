//! [`ByteUint`] comparisons.

use crate::ByteUint;
use core::cmp::Ordering;

impl ByteUint {
    /// Numeric comparison between two values of equal width.
    ///
    /// With the most significant byte stored first, numeric order is
    /// lexicographic limb order.
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        debug_assert_eq!(self.len(), rhs.len(), "width mismatch");
        self.limbs.cmp(&rhs.limbs)
    }
}

impl Ord for ByteUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for ByteUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
