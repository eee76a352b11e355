//! GF(p751) arithmetic in Montgomery representation.
//!
//! Two levels are provided. The raw functions (`to_mont()`,
//! `fpmul_mont()`, `fpinv_mont()`...) work on plain `Felm` arrays and
//! follow the convention that an operand is in the Montgomery domain
//! when the caller says so. The `GFp751` type wraps a `Felm` that is
//! always in Montgomery representation, and provides the usual
//! operators on top of the raw functions.

use rand_core::{CryptoRng, RngCore};

use super::addchain::{pow_p751_minus_2, ChainElement};
use super::kernel::{fpadd, fpdiv2, fpneg, fpsub, mp_mul, rdc_mont};
use super::mp::{copy_words, is_zero, zero_words, Digit};

/// Number of 64-bit digits in a field element.
pub const NWORDS_FIELD: usize = 12;

/// A field element (12 digits, little-endian).
pub type Felm = [Digit; NWORDS_FIELD];

/// A double-width element, used for unreduced products.
pub type Dfelm = [Digit; 2 * NWORDS_FIELD];

/// The modulus p751 = 2^372*3^239 - 1.
pub const P751: Felm = [
    0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xEEAFFFFFFFFFFFFF,
    0xE3EC968549F878A8, 0xDA959B1A13F7CC76, 0x084E9867D6EBE876,
    0x8562B5045CB25748, 0x0E12909F97BADC66, 0x00006FE5D541F71C,
];

/// p751 + 1.
pub const P751P1: Felm = [
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0xEEB0000000000000,
    0xE3EC968549F878A8, 0xDA959B1A13F7CC76, 0x084E9867D6EBE876,
    0x8562B5045CB25748, 0x0E12909F97BADC66, 0x00006FE5D541F71C,
];

/// R^2 mod p751, with R = 2^768.
pub const MONTGOMERY_R2: Felm = [
    0x233046449DAD4058, 0xDB010161A696452A, 0x5E36941472E3FD8E,
    0xF40BFE2082A2E706, 0x4932CCA8904F8751, 0x1F735F1F1EE7FC81,
    0xA24F4D80C1048E18, 0xB56C383CCDB607C5, 0x441DD47B735F9C90,
    0x5673ED2C6A6AC82A, 0x06C905261132294B, 0x000041AD830F1F35,
];

/// R mod p751 (the value 1 in Montgomery representation).
pub const MONTGOMERY_ONE: Felm = [
    0x00000000000249AD, 0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000, 0x8310000000000000,
    0x5527B1E4375C6C66, 0x697797BF3F4F24D0, 0xC89DB7B2AC5C4E2E,
    0x4CA4B439D2076956, 0x10F7926C7512C7E9, 0x00002D5B24BCE5E2,
];

// -1/p751 mod 2^64 (this happens to be 1, since p751 = -1 mod 2^64).
pub(crate) const P751_M0I: u64 = ninv64(P751[0]);

// Return -1/x mod 2^64. It is assumed that x is odd.
const fn ninv64(x: u64) -> u64 {
    let y = 2u64.wrapping_sub(x);
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    y.wrapping_neg()
}

/// Copy a field element.
#[inline(always)]
pub fn fpcopy(a: &Felm, c: &mut Felm) {
    copy_words(a, c);
}

/// Set a field element to zero.
#[inline(always)]
pub fn fpzero(a: &mut Felm) {
    zero_words(a);
}

/// Montgomery multiplication: returns `ma*mb/R mod p751`.
#[inline]
pub fn fpmul_mont(ma: &Felm, mb: &Felm) -> Felm {
    let mut t: Dfelm = [0; 2 * NWORDS_FIELD];
    mp_mul(ma, mb, &mut t);
    let mut mc = [0; NWORDS_FIELD];
    rdc_mont(&t, &mut mc);
    mc
}

/// Montgomery squaring: returns `ma^2/R mod p751`.
#[inline]
pub fn fpsqr_mont(ma: &Felm) -> Felm {
    let mut t: Dfelm = [0; 2 * NWORDS_FIELD];
    mp_mul(ma, ma, &mut t);
    let mut mc = [0; NWORDS_FIELD];
    rdc_mont(&t, &mut mc);
    mc
}

/// Conversion to Montgomery representation: returns `a*R mod p751`.
///
/// Any 768-bit input is accepted (it is implicitly reduced).
#[inline]
pub fn to_mont(a: &Felm) -> Felm {
    fpmul_mont(a, &MONTGOMERY_R2)
}

/// Conversion from Montgomery representation: returns `ma/R mod p751`.
#[inline]
pub fn from_mont(ma: &Felm) -> Felm {
    let mut one = [0; NWORDS_FIELD];
    one[0] = 1;
    fpmul_mont(ma, &one)
}

/// Field inversion in Montgomery representation (in place):
/// `a = (a/R)^(-1)*R mod p751`.
///
/// This is a fixed exponentiation to the power p751 - 2; zero is
/// mapped to zero.
pub fn fpinv_mont(a: &mut Felm) {
    *a = pow_p751_minus_2(a);
}

/// Constant-time selection: returns `x` if `option` is 0, or `y` if
/// `option` is 0xFFFFFFFFFFFFFFFF. Other values of `option` are not
/// allowed.
#[inline]
pub fn select_felm(x: &Felm, y: &Felm, option: Digit) -> Felm {
    debug_assert!(option == 0 || option == !0);
    let mut z = [0; NWORDS_FIELD];
    for i in 0..NWORDS_FIELD {
        z[i] = x[i] ^ (option & (x[i] ^ y[i]));
    }
    z
}

impl ChainElement for Felm {
    #[inline(always)]
    fn chain_square(&mut self) {
        *self = fpsqr_mont(self);
    }

    #[inline(always)]
    fn chain_mul(&mut self, rhs: &Self) {
        *self = fpmul_mont(self, rhs);
    }
}

/// An element of GF(p751), in Montgomery representation.
#[derive(Clone, Copy, Debug)]
pub struct GFp751(pub(crate) Felm);

impl GFp751 {

    // Modulus p751 in base 2^64 (low-to-high order).
    pub const MODULUS: Felm = P751;

    pub const ZERO: Self = Self([0; NWORDS_FIELD]);
    pub const ONE: Self = Self(MONTGOMERY_ONE);

    // -1 = p751 - R mod p751
    pub const MINUS_ONE: Self = Self([
        0xFFFFFFFFFFFDB652, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x6B9FFFFFFFFFFFFF,
        0x8EC4E4A1129C0C42, 0x711E035AD4A8A7A6, 0x3FB0E0B52A8F9A48,
        0x38BE00CA8AAAEDF1, 0xFD1AFE3322A8147D, 0x0000428AB0851139,
    ]);

    // Create an element from its integer value, provided as 12 limbs in
    // low-to-high order. The value is implicitly reduced modulo p751.
    #[inline]
    pub fn from_w64le(x: &[u64; NWORDS_FIELD]) -> Self {
        Self(to_mont(x))
    }

    #[inline]
    pub fn from_u64(x: u64) -> Self {
        let mut t = [0; NWORDS_FIELD];
        t[0] = x;
        Self(to_mont(&t))
    }

    // Create an element from its Montgomery representation. The limbs
    // MUST encode an integer lower than p751.
    #[inline(always)]
    pub fn from_mont_limbs(x: &Felm) -> Self {
        Self(*x)
    }

    #[inline(always)]
    pub fn to_mont_limbs(self) -> Felm {
        self.0
    }

    // Get the integer value of this element (in the 0..p751-1 range),
    // as 12 limbs in low-to-high order.
    #[inline]
    pub fn to_w64le(self) -> [u64; NWORDS_FIELD] {
        from_mont(&self.0)
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        let a = self.0;
        fpadd(&a, &rhs.0, &mut self.0);
    }

    #[inline(always)]
    fn set_sub(&mut self, rhs: &Self) {
        let a = self.0;
        fpsub(&a, &rhs.0, &mut self.0);
    }

    // Negate this value (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        fpneg(&mut self.0);
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        self.0 = fpmul_mont(&self.0, &rhs.0);
    }

    // Divide this value by rhs; if rhs is zero, then the result is zero.
    #[inline(always)]
    fn set_div(&mut self, rhs: &Self) {
        self.set_mul(&rhs.invert());
    }

    #[inline(always)]
    pub fn set_half(&mut self) {
        let a = self.0;
        fpdiv2(&a, &mut self.0);
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    #[inline(always)]
    pub fn set_mul2(&mut self) {
        let a = self.0;
        fpadd(&a, &a, &mut self.0);
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    #[inline(always)]
    pub fn set_square(&mut self) {
        self.0 = fpsqr_mont(&self.0);
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
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

    // Invert this value (in place); zero is left unchanged.
    #[inline(always)]
    pub fn set_invert(&mut self) {
        fpinv_mont(&mut self.0);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0 = select_felm(&self.0, &a.0, cw);
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or not exchanged if ctl == 0x00000000.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        debug_assert!(ctl == 0 || ctl == 0xFFFFFFFF);
        let cw = ((ctl as i32) as i64) as u64;
        for i in 0..NWORDS_FIELD {
            let t = cw & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        // Representations are always fully reduced.
        let mut t = [0; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            t[i] = self.0[i] ^ rhs.0[i];
        }
        is_zero(&t)
    }

    #[inline(always)]
    pub fn iszero(self) -> u32 {
        is_zero(&self.0)
    }

    // Set this element to a random value; the source RNG MUST be
    // cryptographically secure. A 1536-bit integer is generated, then
    // reduced; the bias is negligible.
    pub fn set_rand<T: CryptoRng + RngCore>(&mut self, rng: &mut T) {
        let mut lo = [0u64; NWORDS_FIELD];
        let mut hi = [0u64; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            lo[i] = rng.next_u64();
            hi[i] = rng.next_u64();
        }

        // lo + hi*2^768 -> lo*R + hi*R^2 (mod p751)
        let a = to_mont(&lo);
        let b = fpmul_mont(&to_mont(&hi), &MONTGOMERY_R2);
        fpadd(&a, &b, &mut self.0);
    }

    pub fn rand<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        let mut r = Self::ZERO;
        r.set_rand(rng);
        r
    }
}

define_field_ops!(GFp751);

// ========================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha512, Digest};
    use rand_core::impls;
    use crate::backend::w64::mp::mp_shiftr1;

    fn zint(x: &[u64]) -> BigInt {
        let mut z = BigInt::from(0u32);
        for i in (0..x.len()).rev() {
            z = (z << 64) + BigInt::from(x[i]);
        }
        z
    }

    fn felm(z: &BigInt) -> Felm {
        let (_, d) = z.to_u64_digits();
        let mut x = [0u64; NWORDS_FIELD];
        x[..d.len()].copy_from_slice(&d);
        x
    }

    fn mkrnd(bx: u64) -> BigInt {
        let mut sh = Sha512::new();
        sh.update(bx.to_le_bytes());
        let v0 = sh.finalize_reset();
        sh.update((bx + (1u64 << 40)).to_le_bytes());
        let v1 = sh.finalize_reset();
        let z0 = BigInt::from_bytes_le(Sign::Plus, &v0);
        let z1 = BigInt::from_bytes_le(Sign::Plus, &v1);
        (z0 + (z1 << 512)) % zint(&P751)
    }

    fn check_mont_ops(za: &BigInt, zb: &BigInt) {
        let zp = zint(&P751);
        let a = felm(za);
        let b = felm(zb);

        let ma = to_mont(&a);
        let mb = to_mont(&b);
        assert!(zint(&ma) == (za << 768) % &zp);
        assert!(from_mont(&ma) == a);

        let c = from_mont(&fpmul_mont(&ma, &mb));
        assert!(zint(&c) == (za * zb) % &zp);
        assert!(fpsqr_mont(&ma) == fpmul_mont(&ma, &ma));

        let mut mi = ma;
        fpinv_mont(&mut mi);
        let c = from_mont(&fpmul_mont(&mi, &ma));
        if za.sign() == Sign::NoSign {
            assert!(mi == [0u64; NWORDS_FIELD]);
        } else {
            assert!(zint(&c) == BigInt::from(1u32));
        }

        let x = GFp751::from_w64le(&a);
        let y = GFp751::from_w64le(&b);
        assert!(zint(&(x + y).to_w64le()) == (za + zb) % &zp);
        assert!(zint(&(x - y).to_w64le()) == ((&zp + za) - zb) % &zp);
        assert!(zint(&(-x).to_w64le()) == (&zp - za) % &zp);
        assert!(zint(&(x * y).to_w64le()) == (za * zb) % &zp);
        assert!(zint(&x.square().to_w64le()) == (za * za) % &zp);
        assert!(zint(&x.mul2().to_w64le()) == (za << 1) % &zp);
        assert!(x.half().mul2().equals(x) == 0xFFFFFFFF);
        assert!(x.xsquare(3).equals(x.square().square().square()) == 0xFFFFFFFF);
        if y.iszero() == 0 {
            assert!(((x / y) * y).equals(x) == 0xFFFFFFFF);
        } else {
            assert!((x / y).iszero() == 0xFFFFFFFF);
        }

        let mut z = x;
        z += &y;
        z -= y;
        z *= &y;
        assert!(z.equals(x * y) == 0xFFFFFFFF);
    }

    #[test]
    fn mont_ops() {
        let zp = zint(&P751);
        let z0 = BigInt::from(0u32);
        let z1 = BigInt::from(1u32);
        let zm = &zp - 1u32;
        check_mont_ops(&z0, &z0);
        check_mont_ops(&z1, &z0);
        check_mont_ops(&z0, &zm);
        check_mont_ops(&zm, &zm);
        check_mont_ops(&zm, &z1);
        for i in 0..100 {
            let za = mkrnd(2 * i);
            let zb = mkrnd(2 * i + 1);
            check_mont_ops(&za, &zb);
        }
    }

    #[test]
    fn constants() {
        let zp = zint(&P751);
        assert!(zp == (BigInt::from(1u32) << 372) * BigInt::from(3u32).pow(239) - 1u32);
        assert!(zint(&P751P1) == &zp + 1u32);
        assert!(zint(&MONTGOMERY_R2) == (BigInt::from(1u32) << 1536) % &zp);
        assert!(zint(&MONTGOMERY_ONE) == (BigInt::from(1u32) << 768) % &zp);
        assert!(P751_M0I == 1);
        assert!(P751[0].wrapping_mul(P751_M0I) == u64::MAX);

        assert!(GFp751::ONE.to_w64le() == {
            let mut t = [0u64; NWORDS_FIELD];
            t[0] = 1;
            t
        });
        assert!((GFp751::ONE + GFp751::MINUS_ONE).iszero() == 0xFFFFFFFF);
        assert!(GFp751::from_u64(7).equals(GFp751::from_w64le(&{
            let mut t = P751P1;
            t[0] = 6;
            t
        })) == 0xFFFFFFFF);
        assert!(GFp751::from_u64(5).equals(GFp751::from_u64(6)) == 0);
    }

    // Known answers, as big-endian hexadecimal.
    fn from_hex_be(s: &str) -> Felm {
        let buf = hex::decode(s).unwrap();
        assert!(buf.len() == 96);
        let mut x = [0u64; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            let mut w = [0u8; 8];
            w.copy_from_slice(&buf[(88 - 8 * i)..(96 - 8 * i)]);
            x[i] = u64::from_be_bytes(w);
        }
        x
    }

    #[test]
    fn kat() {
        // 2*R mod p751
        let m2 = from_hex_be("00005ab64979cbc421ef24d8ea258fd299496873a40ed2ad913b6f6558b89c5cd2ef2f7e7e9e49a0aa4f63c86eb8d8cd06200000000000000000000000000000000000000000000000000000000000000000000000000000000000000004935a");
        assert!(GFp751::from_u64(2).to_mont_limbs() == m2);

        // 1/3 mod p751
        let i3 = from_hex_be("0000254c9c6b525eaf5b858a87e8f4222c763c56c990c7c2ad6f88229cf94d7cf38733b35bfd4427a14edcd718a828384f9000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000");
        assert!(GFp751::from_u64(3).invert().to_w64le() == i3);

        // 1/2 = (p751 + 1)/2
        let mut h = P751P1;
        mp_shiftr1(&mut h);
        let mut m = to_mont(&[2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        fpinv_mont(&mut m);
        assert!(from_mont(&m) == h);
        assert!(GFp751::ONE.half().to_w64le() == h);
    }

    #[test]
    fn selection() {
        let x = to_mont(&felm(&mkrnd(1000)));
        let y = to_mont(&felm(&mkrnd(1001)));
        assert!(select_felm(&x, &y, 0) == x);
        assert!(select_felm(&x, &y, !0) == y);

        let a = GFp751::from_mont_limbs(&x);
        let b = GFp751::from_mont_limbs(&y);
        assert!(GFp751::select(&a, &b, 0).equals(a) == 0xFFFFFFFF);
        assert!(GFp751::select(&a, &b, 0xFFFFFFFF).equals(b) == 0xFFFFFFFF);
        let mut c = a;
        c.set_cond(&b, 0);
        assert!(c.equals(a) == 0xFFFFFFFF);
        c.set_cond(&b, 0xFFFFFFFF);
        assert!(c.equals(b) == 0xFFFFFFFF);

        let (mut u, mut v) = (a, b);
        GFp751::cswap(&mut u, &mut v, 0);
        assert!(u.equals(a) == 0xFFFFFFFF && v.equals(b) == 0xFFFFFFFF);
        GFp751::cswap(&mut u, &mut v, 0xFFFFFFFF);
        assert!(u.equals(b) == 0xFFFFFFFF && v.equals(a) == 0xFFFFFFFF);
        assert!(a.equals(b) == 0);

        let mut z = x;
        fpzero(&mut z);
        assert!(z == [0u64; NWORDS_FIELD]);
        fpcopy(&y, &mut z);
        assert!(z == y);
    }

    // Deterministic generator for tests only (not secure).
    struct TestRng(u64);

    impl RngCore for TestRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 ^ (self.0 >> 29)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for TestRng {}

    #[test]
    fn random() {
        let zp = zint(&P751);
        let mut rng = TestRng(0x0123456789ABCDEF);
        let a = GFp751::rand(&mut rng);
        let b = GFp751::rand(&mut rng);
        assert!(zint(&a.to_mont_limbs()) < zp);
        assert!(zint(&b.to_mont_limbs()) < zp);
        assert!(a.equals(b) == 0);
        assert!((a * a.invert()).equals(GFp751::ONE) == 0xFFFFFFFF);

        // Same seed, same output; the value matches lo + hi*2^768.
        let mut rng = TestRng(0x0123456789ABCDEF);
        let mut lo = [0u64; NWORDS_FIELD];
        let mut hi = [0u64; NWORDS_FIELD];
        for i in 0..NWORDS_FIELD {
            lo[i] = rng.next_u64();
            hi[i] = rng.next_u64();
        }
        let zv = (zint(&lo) + (zint(&hi) << 768)) % &zp;
        assert!(zint(&a.to_w64le()) == zv);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn select_rejects_bad_mask() {
        let x = to_mont(&felm(&mkrnd(1010)));
        let y = to_mont(&felm(&mkrnd(1011)));
        select_felm(&x, &y, 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn cswap_rejects_bad_mask() {
        let mut a = GFp751::from_u64(3);
        let mut b = GFp751::from_u64(4);
        GFp751::cswap(&mut a, &mut b, 1);
    }
}
