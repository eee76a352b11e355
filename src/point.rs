//! Projective x-only points.
//!
//! SIDH works with Montgomery curves in x-only projective coordinates: a
//! point is a pair `(X:Z)` standing for the affine abscissa `x = X/Z`.
//! `PointProj` has coordinates in GF(p751^2); `PointProjBasefield` has
//! coordinates in GF(p751).
//!
//! The conditional swaps are the building block of the Montgomery
//! ladder; they run in constant time and touch every limb of both points
//! regardless of the mask. `swap_points()` and `swap_points_basefield()`
//! take a full-digit mask (0 or 0xFFFFFFFFFFFFFFFF); the `cswap()`,
//! `set_cond()` and `select()` methods take the usual `u32` mask.

// Projective coordinates traditionally use uppercase letters.
#![allow(non_snake_case)]

use crate::backend::w64::fp751::NWORDS_FIELD;
use crate::backend::w64::mp::Digit;
use crate::field::{GFp751, GFp751x2};

/// A point in projective x-only coordinates over GF(p751^2).
#[derive(Clone, Copy, Debug)]
pub struct PointProj {
    pub X: GFp751x2,
    pub Z: GFp751x2,
}

/// A point in projective x-only coordinates over GF(p751).
#[derive(Clone, Copy, Debug)]
pub struct PointProjBasefield {
    pub X: GFp751,
    pub Z: GFp751,
}

/// Swaps points `P` and `Q` if `option` is 0xFFFFFFFFFFFFFFFF, or leaves
/// them unchanged if `option` is 0. Other values of `option` are not
/// allowed.
pub fn swap_points(P: &mut PointProj, Q: &mut PointProj, option: Digit) {
    debug_assert!(option == 0 || option == !0);
    for i in 0..NWORDS_FIELD {
        for j in 0..2 {
            let t = option & (P.X.0[j][i] ^ Q.X.0[j][i]);
            P.X.0[j][i] ^= t;
            Q.X.0[j][i] ^= t;
            let t = option & (P.Z.0[j][i] ^ Q.Z.0[j][i]);
            P.Z.0[j][i] ^= t;
            Q.Z.0[j][i] ^= t;
        }
    }
}

/// Swaps base field points `P` and `Q` if `option` is
/// 0xFFFFFFFFFFFFFFFF, or leaves them unchanged if `option` is 0.
pub fn swap_points_basefield(P: &mut PointProjBasefield,
    Q: &mut PointProjBasefield, option: Digit)
{
    debug_assert!(option == 0 || option == !0);
    for i in 0..NWORDS_FIELD {
        let t = option & (P.X.0[i] ^ Q.X.0[i]);
        P.X.0[i] ^= t;
        Q.X.0[i] ^= t;
        let t = option & (P.Z.0[i] ^ Q.Z.0[i]);
        P.Z.0[i] ^= t;
        Q.Z.0[i] ^= t;
    }
}

// Methods shared by both point types; $swap is the limb-level swap
// function for the type.
macro_rules! define_point_ops { ($typename:ident, $fe:ident, $swap:ident) => {
    impl $typename {

        #[inline(always)]
        pub const fn new(X: $fe, Z: $fe) -> Self {
            Self { X, Z }
        }

        /// Creates the point `(x:1)` from an affine abscissa.
        #[inline(always)]
        pub const fn from_affine(x: $fe) -> Self {
            Self { X: x, Z: $fe::ONE }
        }

        /// Returns the affine abscissa `X/Z`. If `Z` is zero, then zero
        /// is returned.
        #[inline]
        pub fn to_affine(self) -> $fe {
            self.X / self.Z
        }

        /// Conditionally swaps two points: `P` and `Q` are exchanged if
        /// `ctl` is 0xFFFFFFFF, or left unchanged if `ctl` is 0x00000000.
        #[inline]
        pub fn cswap(P: &mut Self, Q: &mut Self, ctl: u32) {
            $swap(P, Q, ((ctl as i32) as i64) as u64);
        }

        /// Sets this point to `P` if `ctl` is 0xFFFFFFFF, or leaves it
        /// unchanged if `ctl` is 0x00000000.
        #[inline]
        pub fn set_cond(&mut self, P: &Self, ctl: u32) {
            self.X.set_cond(&P.X, ctl);
            self.Z.set_cond(&P.Z, ctl);
        }

        /// Returns a copy of `P0` (if `ctl` is 0x00000000) or of `P1` (if
        /// `ctl` is 0xFFFFFFFF).
        #[inline(always)]
        pub fn select(P0: &Self, P1: &Self, ctl: u32) -> Self {
            let mut P = *P0;
            P.set_cond(P1, ctl);
            P
        }

        /// Compares two points as projective classes.
        ///
        /// Returned value is 0xFFFFFFFF if `X1*Z2 = X2*Z1`, 0x00000000
        /// otherwise. The degenerate pair (0:0) is equal only to itself.
        #[inline]
        pub fn equals(self, rhs: Self) -> u32 {
            let e = (self.X * rhs.Z).equals(rhs.X * self.Z);
            let n1 = self.X.iszero() & self.Z.iszero();
            let n2 = rhs.X.iszero() & rhs.Z.iszero();
            e & !(n1 ^ n2)
        }
    }
} }

define_point_ops!(PointProj, GFp751x2, swap_points);
define_point_ops!(PointProjBasefield, GFp751, swap_points_basefield);

// ========================================================================
