//! Low-level arithmetic kernels for p751.
//!
//! These are the primitives on which the Montgomery and GF(p751^2)
//! layers are built: a raw 751-bit integer product, Montgomery
//! reduction, and modular addition, subtraction, negation and halving.
//! The implementations here are portable and constant-time; a
//! platform-specific implementation may replace any of them as long as
//! it keeps the same contract:
//!
//!  - `mp_mul()` computes the full 1536-bit product of two 768-bit
//!    integers.
//!
//!  - `rdc_mont()` takes an integer lower than `p751*2^768` and returns
//!    its Montgomery reduction, fully reduced (lower than p751).
//!
//!  - `fpadd()`, `fpsub()`, `fpneg()` and `fpdiv2()` take operands in
//!    the `[0, p751-1]` range and return results in the same range.
//!    They do not care about Montgomery representation (the operations
//!    are linear).

use super::{addcarry_u64, subborrow_u64, umull_add2};
use super::mp::{is_lt, mp_add, mp_shiftr1, mp_sub, zero_words};
use super::fp751::{Dfelm, Felm, NWORDS_FIELD, P751, P751_M0I};

const N: usize = NWORDS_FIELD;

/// Integer multiplication: `c = a*b` (over 24 digits).
pub fn mp_mul(a: &Felm, b: &Felm, c: &mut Dfelm) {
    zero_words(c);
    for i in 0..N {
        let f = a[i];
        let mut cc = 0;
        for j in 0..N {
            (c[i + j], cc) = umull_add2(f, b[j], c[i + j], cc);
        }
        c[i + N] = cc;
    }
}

/// Montgomery reduction: `mc = ma/2^768 mod p751`.
///
/// The input MUST be lower than `p751*2^768`. The output is lower
/// than p751.
pub fn rdc_mont(ma: &Dfelm, mc: &mut Felm) {
    debug_assert!({
        let mut hi = [0u64; N];
        hi.copy_from_slice(&ma[N..]);
        is_lt(&hi, &P751) != 0
    });

    // At step i, we add f*p751*2^(64*i) so that digit i becomes zero.
    // The carry out of the top of each step lands on digit i+N+1, which
    // is where the next step adds its own final carry.
    let mut t = *ma;
    let mut extra = 0;
    for i in 0..N {
        let f = t[i].wrapping_mul(P751_M0I);
        let mut cc = 0;
        for j in 0..N {
            (t[i + j], cc) = umull_add2(f, P751[j], t[i + j], cc);
        }
        (t[i + N], extra) = addcarry_u64(t[i + N], cc, extra);
    }

    // The upper half (with the extra carry) is now lower than 2*p751;
    // subtract the modulus if necessary.
    let mut cc = 0;
    for i in 0..N {
        (mc[i], cc) = subborrow_u64(t[i + N], P751[i], cc);
    }
    let mm = (extra as u64).wrapping_sub(cc as u64);
    let mut cc = 0;
    for i in 0..N {
        (mc[i], cc) = addcarry_u64(mc[i], mm & P751[i], cc);
    }
}

/// Modular addition: `c = a + b mod p751`.
pub fn fpadd(a: &Felm, b: &Felm, c: &mut Felm) {
    debug_assert!(is_lt(a, &P751) != 0 && is_lt(b, &P751) != 0);

    let mut t = [0u64; N];
    let cc1 = mp_add(a, b, &mut t);
    let cc2 = mp_sub(&t, &P751, c);

    // Add the modulus back if the subtraction borrowed (and the
    // addition did not carry, which never happens with valid inputs).
    let m = cc2.wrapping_neg() & !cc1.wrapping_neg();
    let mut cc = 0;
    for i in 0..N {
        (c[i], cc) = addcarry_u64(c[i], m & P751[i], cc);
    }
}

/// Modular subtraction: `c = a - b mod p751`.
pub fn fpsub(a: &Felm, b: &Felm, c: &mut Felm) {
    debug_assert!(is_lt(a, &P751) != 0 && is_lt(b, &P751) != 0);

    let m = mp_sub(a, b, c).wrapping_neg();
    let mut cc = 0;
    for i in 0..N {
        (c[i], cc) = addcarry_u64(c[i], m & P751[i], cc);
    }
}

/// Modular negation (in place): `a = -a mod p751`.
pub fn fpneg(a: &mut Felm) {
    debug_assert!(is_lt(a, &P751) != 0);

    let x = *a;
    let m = mp_sub(&[0u64; N], &x, a).wrapping_neg();
    let mut cc = 0;
    for i in 0..N {
        (a[i], cc) = addcarry_u64(a[i], m & P751[i], cc);
    }
}

/// Modular halving: `c = a/2 mod p751`.
pub fn fpdiv2(a: &Felm, c: &mut Felm) {
    debug_assert!(is_lt(a, &P751) != 0);

    // If a is odd, then a + p751 is even, and lower than 2^768.
    let m = (a[0] & 1).wrapping_neg();
    let mut pm = [0u64; N];
    for i in 0..N {
        pm[i] = m & P751[i];
    }
    mp_add(a, &pm, c);
    mp_shiftr1(c);
}

// ========================================================================
