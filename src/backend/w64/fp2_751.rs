//! GF(p751^2) arithmetic.
//!
//! An element of GF(p751^2) = GF(p751)[i]/(i^2 + 1) is a pair
//! `[a0, a1]` of base field elements, for the value `a0 + i*a1`. As in
//! the base field, the raw functions work on plain arrays (each
//! component in Montgomery representation when the caller says so),
//! while `GFp751x2` always holds Montgomery representations.

use rand_core::{CryptoRng, RngCore};

use super::fp751::{
    fpinv_mont, fpmul_mont, fpsqr_mont, from_mont, select_felm, to_mont,
    fpcopy, fpzero, Dfelm, Felm, GFp751, NWORDS_FIELD, P751,
};
use super::kernel::{fpadd, fpdiv2, fpneg, fpsub, mp_mul, rdc_mont};
use super::mp::{is_zero, mp_add, mp_sub, Digit};
use super::addcarry_u64;

/// An element of GF(p751^2): `[a0, a1]` stands for `a0 + i*a1`.
pub type F2elm = [Felm; 2];

/// Copy a GF(p751^2) element.
#[inline(always)]
pub fn fp2copy(a: &F2elm, c: &mut F2elm) {
    fpcopy(&a[0], &mut c[0]);
    fpcopy(&a[1], &mut c[1]);
}

/// Set a GF(p751^2) element to zero.
#[inline(always)]
pub fn fp2zero(a: &mut F2elm) {
    fpzero(&mut a[0]);
    fpzero(&mut a[1]);
}

/// Negation (in place).
#[inline]
pub fn fp2neg(a: &mut F2elm) {
    fpneg(&mut a[0]);
    fpneg(&mut a[1]);
}

#[inline]
pub fn fp2add(a: &F2elm, b: &F2elm) -> F2elm {
    let mut c = [[0; NWORDS_FIELD]; 2];
    fpadd(&a[0], &b[0], &mut c[0]);
    fpadd(&a[1], &b[1], &mut c[1]);
    c
}

#[inline]
pub fn fp2sub(a: &F2elm, b: &F2elm) -> F2elm {
    let mut c = [[0; NWORDS_FIELD]; 2];
    fpsub(&a[0], &b[0], &mut c[0]);
    fpsub(&a[1], &b[1], &mut c[1]);
    c
}

/// Division by two.
#[inline]
pub fn fp2div2(a: &F2elm) -> F2elm {
    let mut c = [[0; NWORDS_FIELD]; 2];
    fpdiv2(&a[0], &mut c[0]);
    fpdiv2(&a[1], &mut c[1]);
    c
}

/// Squaring in Montgomery representation.
///
/// c0 = (a0 + a1)*(a0 - a1), c1 = 2*a0*a1. The sums a0 + a1 and 2*a0
/// are kept unreduced (lower than 2*p751); the products stay below
/// `p751*2^768`, which is what the Montgomery reduction requires.
pub fn fp2sqr_mont(a: &F2elm) -> F2elm {
    let mut t1 = [0; NWORDS_FIELD];
    let mut t2 = [0; NWORDS_FIELD];
    let mut t3 = [0; NWORDS_FIELD];
    mp_add(&a[0], &a[1], &mut t1);
    fpsub(&a[0], &a[1], &mut t2);
    mp_add(&a[0], &a[0], &mut t3);
    [fpmul_mont(&t1, &t2), fpmul_mont(&t3, &a[1])]
}

/// Multiplication in Montgomery representation.
///
/// Karatsuba: three integer products, and one Montgomery reduction per
/// output component.
pub fn fp2mul_mont(a: &F2elm, b: &F2elm) -> F2elm {
    let mut tt1: Dfelm = [0; 2 * NWORDS_FIELD];
    let mut tt2: Dfelm = [0; 2 * NWORDS_FIELD];
    let mut tt3: Dfelm = [0; 2 * NWORDS_FIELD];
    let mut t1 = [0; NWORDS_FIELD];
    let mut t2 = [0; NWORDS_FIELD];
    let mut c = [[0; NWORDS_FIELD]; 2];

    mp_mul(&a[0], &b[0], &mut tt1);
    mp_mul(&a[1], &b[1], &mut tt2);
    mp_add(&a[0], &a[1], &mut t1);
    mp_add(&b[0], &b[1], &mut t2);

    // tt3 = a0*b0 - a1*b1; if negative, add p751*2^768 to bring it back
    // into the range accepted by rdc_mont().
    let mask = mp_sub(&tt1, &tt2, &mut tt3).wrapping_neg();
    let mut cc = 0;
    for i in 0..NWORDS_FIELD {
        (tt3[NWORDS_FIELD + i], cc) =
            addcarry_u64(tt3[NWORDS_FIELD + i], P751[i] & mask, cc);
    }
    rdc_mont(&tt3, &mut c[0]);

    // (a0 + a1)*(b0 + b1) - a0*b0 - a1*b1 = a0*b1 + a1*b0 (never negative)
    let t = tt1;
    mp_add(&t, &tt2, &mut tt1);
    mp_mul(&t1, &t2, &mut tt2);
    let t = tt2;
    mp_sub(&t, &tt1, &mut tt2);
    rdc_mont(&tt2, &mut c[1]);
    c
}

/// Inversion (in place): `a = (a0 - i*a1)/(a0^2 + a1^2)`.
///
/// A single base field inversion is used. Zero is mapped to zero.
pub fn fp2inv_mont(a: &mut F2elm) {
    let mut n = [0; NWORDS_FIELD];
    fpadd(&fpsqr_mont(&a[0]), &fpsqr_mont(&a[1]), &mut n);
    fpinv_mont(&mut n);
    fpneg(&mut a[1]);
    a[0] = fpmul_mont(&a[0], &n);
    a[1] = fpmul_mont(&a[1], &n);
}

/// Conversion of both components to Montgomery representation.
#[inline]
pub fn to_fp2mont(a: &F2elm) -> F2elm {
    [to_mont(&a[0]), to_mont(&a[1])]
}

/// Conversion of both components from Montgomery representation.
#[inline]
pub fn from_fp2mont(ma: &F2elm) -> F2elm {
    [from_mont(&ma[0]), from_mont(&ma[1])]
}

/// Constant-time selection: returns `x` if `option` is 0, or `y` if
/// `option` is 0xFFFFFFFFFFFFFFFF.
#[inline]
pub fn select_f2elm(x: &F2elm, y: &F2elm, option: Digit) -> F2elm {
    [select_felm(&x[0], &y[0], option), select_felm(&x[1], &y[1], option)]
}

/// An element of GF(p751^2), with both components in Montgomery
/// representation.
#[derive(Clone, Copy, Debug)]
pub struct GFp751x2(pub(crate) F2elm);

impl GFp751x2 {

    pub const ZERO: Self = Self([[0; NWORDS_FIELD]; 2]);
    pub const ONE: Self = Self([GFp751::ONE.0, [0; NWORDS_FIELD]]);
    pub const I: Self = Self([[0; NWORDS_FIELD], GFp751::ONE.0]);
    pub const MINUS_ONE: Self = Self([GFp751::MINUS_ONE.0, [0; NWORDS_FIELD]]);

    #[inline(always)]
    pub const fn new(x0: GFp751, x1: GFp751) -> Self {
        Self([x0.0, x1.0])
    }

    // Create an element from the integer values of its components, each
    // provided as 12 limbs in low-to-high order (implicitly reduced).
    #[inline]
    pub fn from_w64le(x0: &[u64; NWORDS_FIELD], x1: &[u64; NWORDS_FIELD]) -> Self {
        Self(to_fp2mont(&[*x0, *x1]))
    }

    // Get the integer values of both components.
    #[inline]
    pub fn to_w64le(self) -> [[u64; NWORDS_FIELD]; 2] {
        from_fp2mont(&self.0)
    }

    #[inline(always)]
    pub fn from_mont_limbs(x: &F2elm) -> Self {
        Self(*x)
    }

    #[inline(always)]
    pub fn to_mont_limbs(self) -> F2elm {
        self.0
    }

    // Get the two components (x0, x1) such that this value is x0 + i*x1.
    #[inline(always)]
    pub fn to_components(self) -> (GFp751, GFp751) {
        (GFp751(self.0[0]), GFp751(self.0[1]))
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        self.0 = fp2add(&self.0, &rhs.0);
    }

    #[inline(always)]
    fn set_sub(&mut self, rhs: &Self) {
        self.0 = fp2sub(&self.0, &rhs.0);
    }

    #[inline(always)]
    pub fn set_neg(&mut self) {
        fp2neg(&mut self.0);
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        self.0 = fp2mul_mont(&self.0, &rhs.0);
    }

    #[inline(always)]
    fn set_div(&mut self, rhs: &Self) {
        self.set_mul(&rhs.invert());
    }

    // Multiply this value by an element of the base field.
    #[inline]
    pub fn set_mul_fp(&mut self, rhs: &GFp751) {
        self.0[0] = fpmul_mont(&self.0[0], &rhs.0);
        self.0[1] = fpmul_mont(&self.0[1], &rhs.0);
    }

    #[inline(always)]
    pub fn mul_fp(self, rhs: &GFp751) -> Self {
        let mut r = self;
        r.set_mul_fp(rhs);
        r
    }

    #[inline(always)]
    pub fn set_half(&mut self) {
        self.0 = fp2div2(&self.0);
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    #[inline(always)]
    pub fn set_mul2(&mut self) {
        self.0 = fp2add(&self.0, &self.0);
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    #[inline(always)]
    pub fn set_square(&mut self) {
        self.0 = fp2sqr_mont(&self.0);
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    #[inline(always)]
    pub fn set_invert(&mut self) {
        fp2inv_mont(&mut self.0);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    // Replace this value with its conjugate a0 - i*a1.
    #[inline(always)]
    pub fn set_conj(&mut self) {
        fpneg(&mut self.0[1]);
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        let mut r = self;
        r.set_conj();
        r
    }

    // Norm of this value over GF(p751): a0^2 + a1^2.
    #[inline]
    pub fn norm(self) -> GFp751 {
        let mut n = [0; NWORDS_FIELD];
        fpadd(&fpsqr_mont(&self.0[0]), &fpsqr_mont(&self.0[1]), &mut n);
        GFp751(n)
    }

    // Conditionally copy the provided value ('a') into self (if
    // ctl == 0xFFFFFFFF); ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0 = select_f2elm(&self.0, &a.0, cw);
    }

    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        debug_assert!(ctl == 0 || ctl == 0xFFFFFFFF);
        let cw = ((ctl as i32) as i64) as u64;
        for j in 0..2 {
            for i in 0..NWORDS_FIELD {
                let t = cw & (a.0[j][i] ^ b.0[j][i]);
                a.0[j][i] ^= t;
                b.0[j][i] ^= t;
            }
        }
    }

    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let mut t = [0; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            t[i] = (self.0[0][i] ^ rhs.0[0][i]) | (self.0[1][i] ^ rhs.0[1][i]);
        }
        is_zero(&t)
    }

    #[inline]
    pub fn iszero(self) -> u32 {
        let mut t = [0; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            t[i] = self.0[0][i] | self.0[1][i];
        }
        is_zero(&t)
    }

    pub fn set_rand<T: CryptoRng + RngCore>(&mut self, rng: &mut T) {
        self.0[0] = GFp751::rand(rng).0;
        self.0[1] = GFp751::rand(rng).0;
    }

    pub fn rand<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        let mut r = Self::ZERO;
        r.set_rand(rng);
        r
    }
}

define_field_ops!(GFp751x2);

// ========================================================================
