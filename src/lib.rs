//! Pure Rust implementation of the Atari Lynx boot ROM decryption.
//!
//! # About
//! Every Lynx cartridge opens with an encrypted loader that the console
//! deciphers at boot with an undocumented modular-exponentiation scheme:
//! a 51-byte (408-bit) public modulus, a public exponent of 3, and a
//! bit-serial modular multiplier run a byte at a time. This crate
//! reimplements that arithmetic in a reusable, testable form:
//!
//! - [`ByteUint`]: fixed-width big integers stored most significant byte
//!   first, one byte per limb, width chosen at runtime;
//! - [`modular::mul_mod`]: the interleaved double-and-reduce multiplier
//!   the ROM actually runs;
//! - [`modular::cube`]: the fixed-exponent-3 shortcut used per block;
//! - [`modular::monty`]: a classical Montgomery engine (REDC plus
//!   square-and-multiply) kept as an independent correctness oracle and
//!   general-exponent fallback;
//! - [`frame`] and [`decrypt`]: the frame/block wire codec with its
//!   running accumulator, and the one-call decryption entry point.
//!
//! Key material is the caller's affair: everything here consumes and
//! produces plain byte buffers.
//!
//! # Example
//! ```
//! use lynx_crypt::{ByteUint, Modulus, decrypt};
//!
//! // a toy 3-byte modulus; the real console uses 51 bytes
//! let modulus = Modulus::new(ByteUint::from_be_hex("6F5219"))?;
//!
//! // one frame: a one-block header followed by a block in wire order
//! let ciphertext = [0xFF, 0x56, 0x34, 0x12];
//!
//! let frame = decrypt(&ciphertext, &modulus)?;
//! assert_eq!(frame.plaintext().len(), modulus.len() - 1);
//! # Ok::<(), lynx_crypt::Error>(())
//! ```
//!
//! # Status
//! The arithmetic is faithful to the console's behaviour, including its
//! quirks; it makes no constant-time guarantee (the original hardware
//! offered none).

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod decrypt;
mod error;
mod limb;
mod modulus;
mod uint;

pub mod frame;
pub mod modular;

pub use crate::{
    decrypt::{decrypt, decrypt_frames},
    error::Error,
    frame::DecodedFrame,
    limb::Limb,
    modulus::Modulus,
    uint::ByteUint,
};
pub use subtle;
