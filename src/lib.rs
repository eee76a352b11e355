//! Fp751 is a Rust library for the finite-field layer of SIDH.
//!
//! This library implements computations in the prime field GF(p751),
//! with p751 = 2^372\*3^239 - 1, and in its quadratic extension
//! GF(p751^2) = GF(p751)\[i\]/(i^2 + 1). These are the fields over which
//! the supersingular isogeny Diffie-Hellman key exchange (SIDH) walks its
//! isogeny graphs. Curve arithmetic, isogeny evaluation, the key exchange
//! protocol itself and the encoding of elements into bytes are left to
//! the caller.
//!
//! Two API levels are provided:
//!
//!  - The raw level, in `backend::w64`, works on plain limb arrays:
//!    `Felm` (12 limbs of 64 bits), `Dfelm` (24 limbs) and `F2elm` (two
//!    `Felm`). Whether a given array holds a value in Montgomery
//!    representation or in standard representation is a matter of
//!    calling convention; functions with `mont` in their name expect
//!    and return Montgomery representation.
//!
//!  - The typed level, `field::GFp751` and `field::GFp751x2`, always
//!    stores values in Montgomery representation, and supports the
//!    usual arithmetic operators. Projective points with coordinates in
//!    these fields are defined in the `point` module.
//!
//! # Conventions
//!
//! All implemented functions are strictly constant-time: execution time
//! and memory access pattern depend only on the (fixed) field size,
//! never on the values being processed. In order to avoid unwanted
//! side-channel leaks, Booleans are avoided (compilers tend to "optimize"
//! things a bit too eagerly when handling `bool` values). Functions that
//! return or use a potentially secret Boolean value use the `u32` type;
//! the convention is that 0xFFFFFFFF means "true", and 0x00000000 means
//! "false". At the raw level, masks are full 64-bit limbs (0 or
//! 0xFFFFFFFFFFFFFFFF). No other value shall be used, for they would lead
//! to unpredictable results (debug builds check it). Similarly, the `Eq`
//! and `PartialEq` traits are not implemented.
//!
//! Inversion uses Fermat's little theorem with a fixed addition chain
//! for the exponent p751 - 2, so that the same sequence of squarings and
//! multiplications is executed for all inputs. Inversion of zero yields
//! zero.
//!
//! Throughout the code, functions that modify the object on which they
//! are called tend to have a name in `set_*()` (e.g. `x.set_square()`
//! squares `x` in place, while `x.square()` leaves `x` unmodified and
//! returns the square as a new instance).
//!
//! No inline assembly is used. On x86-64 architectures, the
//! `_addcarry_u64()` and `_subborrow_u64()` intrinsics are used
//! (from `core::arch::x86_64`); however, plain implementations with
//! no intrinsics are available (and used on other architectures).

#![no_std]

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod backend;
pub mod field;
pub mod point;
