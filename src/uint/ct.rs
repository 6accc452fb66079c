//! Conditional-selection plumbing for [`ByteUint`].

use crate::ByteUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl ByteUint {
    /// Overwrite `self` with `other` when `choice` is truthy, leave it
    /// untouched otherwise.
    ///
    /// This is the commit step of the compute-then-conditionally-commit
    /// reduction primitive.
    pub fn ct_assign(&mut self, other: &Self, choice: Choice) {
        debug_assert_eq!(self.len(), other.len(), "width mismatch");

        for (a, b) in self.limbs.iter_mut().zip(other.limbs.iter()) {
            a.conditional_assign(b, choice);
        }
    }
}

impl ConstantTimeEq for ByteUint {
    fn ct_eq(&self, other: &Self) -> Choice {
        debug_assert_eq!(self.len(), other.len(), "width mismatch");

        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

#[cfg(test)]
mod tests {
    use super::ByteUint;
    use subtle::Choice;

    #[test]
    fn assign_only_when_truthy() {
        let mut value = ByteUint::zero_with_len(2);
        let other = ByteUint::from_be_slice(&[0x12, 0x34]);

        value.ct_assign(&other, Choice::from(0));
        assert!(bool::from(value.is_zero()));

        value.ct_assign(&other, Choice::from(1));
        assert_eq!(value, other);
    }
}
