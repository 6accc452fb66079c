//! Classical Montgomery arithmetic.
//!
//! Unlike [`mul`](crate::modular::mul), which interleaves reduction with
//! the multiply itself, this engine works in the Montgomery residue domain
//! `x * 256^L mod modulus` and reduces with REDC (Algorithm 14.32 in the
//! Handbook of Applied Cryptography, run a byte at a time). It supports
//! arbitrary exponents and is the independent oracle the fixed-exponent
//! shortcut is validated against.

use super::reduce::{conditional_sub, conditional_sub_with_carry};
use crate::{ByteUint, Error, Limb, Modulus};
use alloc::vec;

/// Precomputed parameters for Montgomery arithmetic over one modulus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyParams {
    /// The validated modulus.
    modulus: Modulus,

    /// `mod_neg_inv * modulus ≡ -1 (mod 256)`.
    mod_neg_inv: Limb,
}

impl MontyParams {
    /// Instantiates parameters for the given modulus.
    ///
    /// On top of the [`Modulus`] invariants this requires oddness, since an
    /// even modulus has no inverse modulo 256; rejected as
    /// [`Error::EvenModulus`].
    pub fn new(modulus: Modulus) -> Result<Self, Error> {
        if !modulus.is_odd() {
            return Err(Error::EvenModulus);
        }

        let mod_neg_inv = mod_neg_inv(&modulus);
        Ok(Self {
            modulus,
            mod_neg_inv,
        })
    }

    /// The modulus these parameters were built for.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// The byte coefficient `v` with `v * modulus ≡ -1 (mod 256)`.
    pub fn mod_neg_inv(&self) -> Limb {
        self.mod_neg_inv
    }

    /// Width of the modulus in bytes.
    fn len(&self) -> usize {
        self.modulus.len()
    }

    /// Maps `value` into the Montgomery domain: `value * 256^L mod modulus`.
    ///
    /// `value` must already be below the modulus. The transform is `8 * L`
    /// rounds of doubling, each followed by one corrective subtraction.
    pub fn encode(&self, value: &ByteUint) -> Result<ByteUint, Error> {
        self.check_len(value)?;

        let mut ret = value.clone();
        for _ in 0..self.len() * Limb::BITS {
            ret.double_assign();
            conditional_sub(&mut ret, &self.modulus);
        }
        Ok(ret)
    }

    /// Maps `value` out of the Montgomery domain: `value / 256^L mod
    /// modulus`, via a domain multiplication by 1 and a final corrective
    /// subtraction.
    pub fn decode(&self, value: &ByteUint) -> Result<ByteUint, Error> {
        let one = ByteUint::one_with_len(self.len());
        let mut ret = self.mul(value, &one)?;
        conditional_sub(&mut ret, &self.modulus);
        Ok(ret)
    }

    /// Montgomery multiplication: `a * b / 256^L mod modulus`, fully
    /// reduced.
    ///
    /// Phase one accumulates the double-width schoolbook product; phase two
    /// folds in `L` multiples of the modulus chosen via
    /// [`mod_neg_inv`](Self::mod_neg_inv) so each low byte cancels; the
    /// upper half is then the result once the final carry-out is
    /// reconciled against one trailing subtraction.
    pub fn mul(&self, a: &ByteUint, b: &ByteUint) -> Result<ByteUint, Error> {
        self.check_len(a)?;
        self.check_len(b)?;

        let len = self.len();
        let m = self.modulus.as_uint().as_limbs();

        // Double-width product, most significant byte first: the byte at
        // position `p` from the least significant end lives at index
        // `2 * len - 1 - p`.
        let mut t = vec![Limb::ZERO; 2 * len];

        for i in 0..len {
            let a_i = a.as_limbs()[len - 1 - i];
            let mut carry = Limb::ZERO;
            for j in 0..len {
                let pos = 2 * len - 1 - (i + j);
                let (lo, hi) = t[pos].mac(a_i, b.as_limbs()[len - 1 - j], carry);
                t[pos] = lo;
                carry = hi;
            }
            t[len - 1 - i] = carry;
        }

        let mut meta_carry = Limb::ZERO;
        for i in 0..len {
            let u = t[2 * len - 1 - i].wrapping_mul(self.mod_neg_inv);
            let mut carry = Limb::ZERO;
            for j in 0..len {
                let pos = 2 * len - 1 - (i + j);
                let (lo, hi) = t[pos].mac(u, m[len - 1 - j], carry);
                t[pos] = lo;
                carry = hi;
            }
            let pos = len - 1 - i;
            let (sum, c) = t[pos].carrying_add(carry, meta_carry);
            t[pos] = sum;
            meta_carry = c;
        }

        // Division by 256^L is taking the upper half. The pre-subtraction
        // value is below twice the modulus, with the overflowed width bit
        // held in `meta_carry`.
        let mut out = ByteUint::from_limbs(&t[..len]);
        conditional_sub_with_carry(&mut out, &self.modulus, meta_carry);

        Ok(out)
    }

    /// Computes `base ^ exponent mod modulus`.
    ///
    /// Plain left-to-right square-and-multiply over every exponent bit,
    /// seeded from the domain image of 1; `base` must be below the modulus
    /// and `exponent` must match its width.
    pub fn pow(&self, base: &ByteUint, exponent: &ByteUint) -> Result<ByteUint, Error> {
        self.check_len(base)?;
        self.check_len(exponent)?;

        let base_m = self.encode(base)?;
        let mut acc = self.encode(&ByteUint::one_with_len(self.len()))?;

        for i in (0..exponent.bits()).rev() {
            acc = self.mul(&acc, &acc)?;
            if exponent.bit_vartime(i) {
                acc = self.mul(&acc, &base_m)?;
            }
        }

        self.decode(&acc)
    }

    fn check_len(&self, operand: &ByteUint) -> Result<(), Error> {
        if operand.len() == self.len() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                expected: self.len(),
                actual: operand.len(),
            })
        }
    }
}

/// Computes `base ^ exponent mod modulus` through the Montgomery engine.
///
/// The general-exponent fallback; block decryption itself always goes
/// through [`cube`](crate::modular::cube).
pub fn pow_mod(base: &ByteUint, exponent: &ByteUint, modulus: &Modulus) -> Result<ByteUint, Error> {
    MontyParams::new(modulus.clone())?.pow(base, exponent)
}

/// Finds the byte `v` with `v * modulus ≡ -1 (mod 256)`, testing one
/// candidate bit of `v` per round against the modulus's least significant
/// byte.
fn mod_neg_inv(modulus: &Modulus) -> Limb {
    let lsb = modulus.as_uint().as_limbs()[modulus.len() - 1];

    let mut v = Limb::ZERO;
    for i in 0..Limb::BITS {
        if lsb.wrapping_mul(v).0 >> i & 1 == 0 {
            v.0 |= 1 << i;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::{MontyParams, pow_mod};
    use crate::{ByteUint, Error, Limb, Modulus};

    fn modulus() -> Modulus {
        Modulus::new(ByteUint::from_be_slice(&[0x6F, 0x52, 0x19])).unwrap()
    }

    fn params() -> MontyParams {
        MontyParams::new(modulus()).unwrap()
    }

    #[test]
    fn coefficient_for_small_modulus() {
        // 0xD7 * 0x19 ≡ 0xFF (mod 256)
        assert_eq!(params().mod_neg_inv(), Limb(0xD7));
    }

    #[test]
    fn rejects_even_modulus() {
        let even = Modulus::new(ByteUint::from_be_slice(&[0x6F, 0x52, 0x18])).unwrap();
        assert_eq!(MontyParams::new(even), Err(Error::EvenModulus));
    }

    #[test]
    fn encode_matches_hand_computation() {
        // 0x0ABCDE * 256^3 mod 0x6F5219 == 0x258D61
        let x = ByteUint::from_be_slice(&[0x0A, 0xBC, 0xDE]);
        assert_eq!(
            params().encode(&x).unwrap(),
            ByteUint::from_be_slice(&[0x25, 0x8D, 0x61])
        );
    }

    #[test]
    fn domain_round_trip() {
        let params = params();
        for value in [
            ByteUint::zero_with_len(3),
            ByteUint::one_with_len(3),
            ByteUint::from_be_slice(&[0x12, 0x34, 0x56]),
            ByteUint::from_be_slice(&[0x6F, 0x52, 0x18]),
        ] {
            let encoded = params.encode(&value).unwrap();
            assert_eq!(params.decode(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn pow_matches_hand_computation() {
        // 0x123456^5 mod 0x6F5219 == 0x005569
        let base = ByteUint::from_be_slice(&[0x12, 0x34, 0x56]);
        let exponent = ByteUint::from_be_slice(&[0x00, 0x00, 0x05]);
        assert_eq!(
            pow_mod(&base, &exponent, &modulus()).unwrap(),
            ByteUint::from_be_slice(&[0x00, 0x55, 0x69])
        );

        // 0x123456^0x010003 mod 0x6F5219 == 0x20BDD2
        let exponent = ByteUint::from_be_slice(&[0x01, 0x00, 0x03]);
        assert_eq!(
            pow_mod(&base, &exponent, &modulus()).unwrap(),
            ByteUint::from_be_slice(&[0x20, 0xBD, 0xD2])
        );
    }

    #[test]
    fn zeroth_power_is_one() {
        let base = ByteUint::from_be_slice(&[0x12, 0x34, 0x56]);
        let zero = ByteUint::zero_with_len(3);
        assert_eq!(
            pow_mod(&base, &zero, &modulus()).unwrap(),
            ByteUint::one_with_len(3)
        );
    }
}
