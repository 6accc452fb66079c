//! Equivalence tests between the Montgomery oracle and `num-bigint`, plus
//! the cross-check that justifies the cube shortcut.

mod common;

use common::{from_biguint, to_biguint};
use lynx_crypt::{
    ByteUint, Limb, Modulus,
    modular::{MontyParams, cube, pow_mod},
};
use num_bigint::BigUint;
use proptest::{collection::vec, prelude::*};

prop_compose! {
    /// Generate a random odd modulus with a clear top bit.
    fn modulus()(mut bytes in vec(any::<u8>(), 1..=8)) -> Modulus {
        bytes[0] &= 0x7F;
        *bytes.last_mut().expect("at least one byte") |= 0x01;
        Modulus::new(ByteUint::from_be_slice(&bytes)).expect("top bit cleared")
    }
}

prop_compose! {
    /// Generate an odd modulus along with a residue below it.
    fn residue()(
        m in modulus(),
        bytes in vec(any::<u8>(), 0..=16),
    ) -> (Modulus, ByteUint) {
        let value = BigUint::from_bytes_be(&bytes) % to_biguint(m.as_uint());
        let len = m.len();
        (m, from_biguint(&value, len))
    }
}

prop_compose! {
    /// Generate an odd modulus, a residue, and an arbitrary exponent of the
    /// modulus width.
    fn residue_and_exponent()(
        base_pair in residue(),
        exp_bytes in vec(any::<u8>(), 0..=8),
    ) -> (Modulus, ByteUint, ByteUint) {
        let (m, base) = base_pair;
        let exponent = BigUint::from_bytes_be(&exp_bytes)
            % (BigUint::from(1u8) << (8 * m.len()));
        let len = m.len();
        (m, base, from_biguint(&exponent, len))
    }
}

proptest! {
    #[test]
    fn domain_round_trip((m, x) in residue()) {
        let params = MontyParams::new(m).expect("odd modulus");
        let encoded = params.encode(&x).expect("in range");
        prop_assert_eq!(params.decode(&encoded).expect("in range"), x);
    }

    #[test]
    fn encode_matches_biguint((m, x) in residue()) {
        let p = to_biguint(m.as_uint());
        let len = m.len();
        let params = MontyParams::new(m).expect("odd modulus");

        let expected = (to_biguint(&x) << (8 * len)) % p;
        prop_assert_eq!(to_biguint(&params.encode(&x).expect("in range")), expected);
    }

    #[test]
    fn monty_mul_matches_biguint((m, a) in residue(), b_bytes in vec(any::<u8>(), 0..=16)) {
        let p = to_biguint(m.as_uint());
        let len = m.len();
        let b = from_biguint(&(BigUint::from_bytes_be(&b_bytes) % &p), len);
        let params = MontyParams::new(m).expect("odd modulus");

        let product = params
            .mul(&params.encode(&a).expect("in range"), &params.encode(&b).expect("in range"))
            .expect("in range");

        let expected = (to_biguint(&a) * to_biguint(&b) << (8 * len)) % &p;
        prop_assert_eq!(to_biguint(&product), expected);
        prop_assert!(product.cmp_vartime(params.modulus().as_uint()).is_lt());
    }

    #[test]
    fn pow_matches_biguint((m, base, exponent) in residue_and_exponent()) {
        let result = pow_mod(&base, &exponent, &m).expect("operands in range");

        let expected = to_biguint(&base)
            .modpow(&to_biguint(&exponent), &to_biguint(m.as_uint()));
        prop_assert_eq!(to_biguint(&result), expected);
    }

    /// The property the whole system rests on: the two-multiplication cube
    /// is a special case of general modular exponentiation.
    #[test]
    fn cube_matches_modexp((m, x) in residue()) {
        let three = from_biguint(&BigUint::from(3u8), m.len());

        let shortcut = cube(&x, &m).expect("operand in range");
        let reference = pow_mod(&x, &three, &m).expect("operands in range");
        prop_assert_eq!(shortcut, reference);
    }
}

/// The ROM modulus ends in 0x79, whose negated inverse modulo 256 is 0x37.
#[test]
fn coefficient_of_the_rom_modulus() {
    let params = MontyParams::new(common::lynx_modulus()).expect("ROM modulus is odd");
    assert_eq!(params.mod_neg_inv(), Limb(0x37));
}
