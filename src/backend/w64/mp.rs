//! Fixed-length multiprecision integers.
//!
//! An integer is an array of `N` digits (64-bit limbs) in little-endian
//! order (least significant digit first). The length is a compile-time
//! parameter; in practice it is either `NWORDS_FIELD` (a field element)
//! or `2*NWORDS_FIELD` (an unreduced product). No function here
//! allocates, and all of them execute a sequence of operations that
//! depends only on `N`.
//!
//! Comparison functions return a `u32` mask (0xFFFFFFFF for "true",
//! 0x00000000 for "false"). Carries and borrows are returned as a digit
//! of value 0 or 1, which callers can turn into a mask with
//! `wrapping_neg()`.

use super::{addcarry_u64, subborrow_u64};

/// A single machine word.
pub type Digit = u64;

/// Size of a digit, in bits.
pub const RADIX: u32 = 64;

/// Copy `a` into `c`.
#[inline(always)]
pub fn copy_words<const N: usize>(a: &[Digit; N], c: &mut [Digit; N]) {
    c.copy_from_slice(&a[..]);
}

/// Set all digits of `a` to zero.
#[inline(always)]
pub fn zero_words<const N: usize>(a: &mut [Digit; N]) {
    for i in 0..N {
        a[i] = 0;
    }
}

/// Set `c` to `a + b` (modulo 2^(64*N)). Returned value is the output
/// carry (0 or 1).
#[inline]
pub fn mp_add<const N: usize>(a: &[Digit; N], b: &[Digit; N],
    c: &mut [Digit; N]) -> Digit
{
    let mut cc = 0;
    for i in 0..N {
        (c[i], cc) = addcarry_u64(a[i], b[i], cc);
    }
    cc as Digit
}

/// Set `c` to `a - b` (modulo 2^(64*N)). Returned value is the output
/// borrow: 1 if `a < b`, 0 otherwise.
#[inline]
pub fn mp_sub<const N: usize>(a: &[Digit; N], b: &[Digit; N],
    c: &mut [Digit; N]) -> Digit
{
    let mut cc = 0;
    for i in 0..N {
        (c[i], cc) = subborrow_u64(a[i], b[i], cc);
    }
    cc as Digit
}

/// Shift `x` right by one bit (in place). The top bit is set to zero.
#[inline]
pub fn mp_shiftr1<const N: usize>(x: &mut [Digit; N]) {
    for i in 0..(N - 1) {
        x[i] = (x[i] >> 1) | (x[i + 1] << (RADIX - 1));
    }
    x[N - 1] >>= 1;
}

/// Shift `x` left by one bit (in place). The top bit is dropped.
#[inline]
pub fn mp_shiftl1<const N: usize>(x: &mut [Digit; N]) {
    for i in (1..N).rev() {
        x[i] = (x[i] << 1) | (x[i - 1] >> (RADIX - 1));
    }
    x[0] <<= 1;
}

/// Return 0xFFFFFFFF if `x` is zero, 0x00000000 otherwise.
#[inline]
pub fn is_zero<const N: usize>(x: &[Digit; N]) -> u32 {
    let mut r = 0;
    for i in 0..N {
        r |= x[i];
    }
    ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
}

/// Return 0xFFFFFFFF if `x` is even, 0x00000000 otherwise.
#[inline(always)]
pub fn is_even<const N: usize>(x: &[Digit; N]) -> u32 {
    ((x[0] & 1) as u32).wrapping_sub(1)
}

/// Return 0xFFFFFFFF if `x < y` (as unsigned integers), 0x00000000
/// otherwise.
#[inline]
pub fn is_lt<const N: usize>(x: &[Digit; N], y: &[Digit; N]) -> u32 {
    // x < y exactly when x - y borrows.
    let mut cc = 0;
    for i in 0..N {
        (_, cc) = subborrow_u64(x[i], y[i], cc);
    }
    (cc as u32).wrapping_neg()
}

// ========================================================================
