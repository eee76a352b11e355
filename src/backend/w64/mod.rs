// The 64-bit backend. Module layout, leaves first:
//
//   mp        fixed-length multiprecision integers (add, sub, shifts,
//             constant-time comparisons)
//   kernel    raw 751-bit product, Montgomery reduction, and the modular
//             add/sub/neg/half primitives
//   addchain  fixed addition chain for exponent p751 - 2
//   fp751     Montgomery arithmetic in GF(p751), and the GFp751 type
//   fp2_751   arithmetic in GF(p751^2), and the GFp751x2 type

// Implementations of all the traits needed to use the simple operators
// (+, -, *, /, unary -) on field element instances, with or without
// references. The type must provide set_add(), set_sub(), set_mul(),
// set_div() and set_neg().
macro_rules! define_binop {
    ($typename:ident, $tr:ident, $f:ident, $atr:ident, $af:ident, $set:ident) => {
        impl core::ops::$tr<$typename> for $typename {
            type Output = $typename;

            #[inline(always)]
            fn $f(self, other: $typename) -> $typename {
                let mut r = self;
                r.$set(&other);
                r
            }
        }

        impl core::ops::$tr<&$typename> for $typename {
            type Output = $typename;

            #[inline(always)]
            fn $f(self, other: &$typename) -> $typename {
                let mut r = self;
                r.$set(other);
                r
            }
        }

        impl core::ops::$tr<$typename> for &$typename {
            type Output = $typename;

            #[inline(always)]
            fn $f(self, other: $typename) -> $typename {
                let mut r = *self;
                r.$set(&other);
                r
            }
        }

        impl core::ops::$tr<&$typename> for &$typename {
            type Output = $typename;

            #[inline(always)]
            fn $f(self, other: &$typename) -> $typename {
                let mut r = *self;
                r.$set(other);
                r
            }
        }

        impl core::ops::$atr<$typename> for $typename {
            #[inline(always)]
            fn $af(&mut self, other: $typename) {
                self.$set(&other);
            }
        }

        impl core::ops::$atr<&$typename> for $typename {
            #[inline(always)]
            fn $af(&mut self, other: &$typename) {
                self.$set(other);
            }
        }
    }
}

macro_rules! define_field_ops { ($typename:ident) => {
    define_binop!($typename, Add, add, AddAssign, add_assign, set_add);
    define_binop!($typename, Sub, sub, SubAssign, sub_assign, set_sub);
    define_binop!($typename, Mul, mul, MulAssign, mul_assign, set_mul);
    define_binop!($typename, Div, div, DivAssign, div_assign, set_div);

    impl core::ops::Neg for $typename {
        type Output = $typename;

        #[inline(always)]
        fn neg(self) -> $typename {
            let mut r = self;
            r.set_neg();
            r
        }
    }

    impl core::ops::Neg for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn neg(self) -> $typename {
            let mut r = *self;
            r.set_neg();
            r
        }
    }
} }

pub mod mp;
pub mod kernel;
pub(crate) mod addchain;
pub mod fp751;
pub mod fp2_751;

// Carrying addition and subtraction should use u64::carrying_add()
// and u64::borrowing_sub(), but these functions are currently only
// experimental.

// Add with carry; carry is 0 or 1.
// (x, y, c_in) -> x + y + c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_addcarry_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _addcarry_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_add(y as u128).wrapping_add(c as u128);
    (z as u64, (z >> 64) as u8)
}

// Subtract with borrow; borrow is 0 or 1.
// (x, y, c_in) -> x - y - c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_subborrow_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _subborrow_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(c as u128);
    (z as u64, (z >> 127) as u8)
}

// Compute x*y+z1+z2 over 128 bits, returned as two 64-bit words (lo, hi).
// This cannot overflow: (2^64-1)^2 + 2*(2^64-1) = 2^128 - 1.
#[inline(always)]
pub(crate) const fn umull_add2(x: u64, y: u64, z1: u64, z2: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128))
        .wrapping_add(z1 as u128).wrapping_add(z2 as u128);
    (t as u64, (t >> 64) as u64)
}
