//! Error types.

use core::fmt;

/// Errors produced by the arithmetic engines and the frame codec.
///
/// Every failure is a deterministic function of the input; nothing in this
/// crate retries or degrades.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An operand's length does not match the modulus length.
    ///
    /// Rejected before any arithmetic runs.
    LengthMismatch {
        /// Length of the modulus, in bytes.
        expected: usize,
        /// Length of the offending operand, in bytes.
        actual: usize,
    },

    /// The most significant bit of the modulus is set.
    ///
    /// The doubling step relies on every intermediate value fitting in the
    /// modulus width, which requires a clear top bit.
    TopBitSet,

    /// The modulus is zero.
    ZeroModulus,

    /// The modulus is even, so no Montgomery coefficient exists for it.
    EvenModulus,

    /// A modular result was found outside `[0, modulus)` after reduction.
    ///
    /// Indicates an engine defect or operands outside their documented
    /// domain; never silently clamped.
    ReductionOverflow,

    /// The ciphertext ended before the block run announced by its header.
    Truncated {
        /// Bytes the frame header committed to.
        needed: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The running accumulator did not return to zero at the end of a frame.
    ///
    /// Historically this signals a key/modulus mismatch rather than a
    /// malformed frame structure, so it is distinct from [`Error::Truncated`]
    /// and only produced by explicit verification.
    AccumulatorMismatch(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch { expected, actual } => {
                write!(f, "operand is {actual} bytes, modulus is {expected}")
            }
            Error::TopBitSet => f.write_str("modulus has its most significant bit set"),
            Error::ZeroModulus => f.write_str("modulus is zero"),
            Error::EvenModulus => f.write_str("modulus is even"),
            Error::ReductionOverflow => f.write_str("modular result out of range"),
            Error::Truncated { needed, actual } => {
                write!(f, "frame needs {needed} bytes, got {actual}")
            }
            Error::AccumulatorMismatch(residue) => {
                write!(f, "accumulator residue {residue:#04x} at end of frame")
            }
        }
    }
}

impl core::error::Error for Error {}
