//! Modular arithmetic engines.
//!
//! Two independent paths coexist here:
//!
//! - [`mul`] and [`cube`] are the production pipeline: the bit-serial
//!   double-and-reduce multiplier the Lynx ROM actually runs, and the
//!   fixed-exponent-3 shortcut built from it.
//! - [`monty`] is a classical Montgomery engine (REDC plus
//!   square-and-multiply) that can raise to arbitrary exponents. It never
//!   sits on the decode path; it exists to cross-check the shortcut and to
//!   serve exponents other than 3.

pub mod cube;
pub mod monty;
pub mod mul;
pub mod reduce;

pub use self::{
    cube::cube,
    monty::{MontyParams, pow_mod},
    mul::mul_mod,
    reduce::conditional_sub,
};
