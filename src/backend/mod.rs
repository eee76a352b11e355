//! Limb-level implementations of the finite fields.
//!
//! This module provides type aliases for the structures that implement
//! the fields GF(p751) and GF(p751^2). Only a 64-bit backend (`w64`) is
//! provided. It uses portable code (128-bit intermediate products) and
//! thus also compiles on 32-bit targets; however, on such targets the
//! compiler may implement the 64-bit multiplications with code that is
//! not fully constant-time, and this combination should be avoided.
//!
//! In general, the following properties apply to the field types:
//!
//!  - An instance encapsulates a field element, in Montgomery
//!    representation (value `x` is stored as `x*2^768 mod p751`).
//!    Conversion to and from the standard representation is explicit,
//!    with `from_w64le()` and `to_w64le()`.
//!
//!  - The constant values `Self::ZERO` and `Self::ONE` contain the
//!    elements of value 0 and 1, respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Division by zero is tolerated, and yields zero (regardless of the
//!    dividend). Operators can use both the raw types, and references
//!    thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. Sequences of multiple squarings can be performed
//!    with `set_xsquare(&mut self, n: u32)` (and a corresponding
//!    `xsquare()` to get the result as a new instance).
//!
//!  - Function `set_neg(&mut self)` negates the instance on which it is
//!    applied. Functions `set_half()` and `set_mul2()` multiply by 1/2
//!    and by 2, respectively.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000.
//!
//!  - Function `select(a0: &Self, a1: &Self, ctl: u32) -> Self` returns
//!    a copy of `a0` if `ctl` is 0x00000000, or a copy of `a1` if
//!    `ctl` is 0xFFFFFFFF.
//!
//!  - Function `cswap(a: &mut Self, b: &mut Self, ctl: u32)`
//!    exchanges the contents of `a` and `b` if `ctl` is 0xFFFFFFFF,
//!    or leaves them unmodified if `ctl` is 0x00000000.
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//!  - Functions `rand()` and `set_rand()` generate a new element from a
//!    cryptographically secure random source; the output is
//!    indistinguishable from a uniformly selected field element.

pub mod w64;

/// Finite field: integers modulo p751 = 2^372\*3^239 - 1.
///
/// The internal implementation strategy uses Montgomery multiplication,
/// with R = 2^768. Inversion is a fixed addition chain.
pub type GFp751 = w64::fp751::GFp751;

/// Quadratic extension GF(p751^2) = GF(p751)\[i\]/(i^2 + 1).
///
/// Multiplication uses the Karatsuba formulas with a single Montgomery
/// reduction per output component.
pub type GFp751x2 = w64::fp2_751::GFp751x2;
