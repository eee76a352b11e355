// Fixed addition chain for the exponent p751 - 2.
//
// Inversion in GF(p751) is computed as x^(p751-2). The exponent is
// public, and so is the chain: the sequence of squarings and
// multiplications, and the index of each table entry being read, are
// the same for all inputs.
//
// The chain starts with a window of odd powers x, x^3, x^5, ..., x^63
// (one squaring and 31 multiplications), then runs the steps below over
// an accumulator initialized to x. Each step (n, e) squares the
// accumulator n times, then multiplies it by x^e. The HEAD steps are
// followed by TAIL_REPS copies of TAIL_STEP (the low bits of p751 - 2
// are mostly ones), then by LAST_STEP. In total: 751 squarings and 147
// multiplications.

pub(crate) const WINDOW_LEN: usize = 32;

pub(crate) const HEAD: [(u8, u8); 55] = [
    (6, 47), (6, 57), (6, 29), (6, 21), (8, 7), (6, 55),
    (6, 7), (9, 7), (10, 37), (8, 33), (8, 63), (8, 47),
    (6, 29), (6, 27), (6, 35), (6, 13), (10, 43), (6, 5),
    (7, 53), (10, 17), (7, 57), (6, 25), (8, 43), (6, 41),
    (8, 1), (10, 39), (6, 19), (6, 3), (7, 31), (7, 45),
    (6, 53), (6, 61), (7, 7), (6, 27), (7, 53), (8, 43),
    (6, 13), (6, 35), (7, 33), (6, 15), (6, 55), (6, 51),
    (6, 7), (7, 55), (8, 31), (6, 25), (6, 11), (7, 33),
    (7, 41), (8, 63), (8, 15), (8, 21), (8, 29), (6, 53),
    (7, 63),
];

pub(crate) const TAIL_STEP: (u8, u8) = (6, 63);
pub(crate) const TAIL_REPS: usize = 60;
pub(crate) const LAST_STEP: (u8, u8) = (6, 61);

/// An element on which the chain can run.
pub(crate) trait ChainElement: Copy {

    /// Square this value (in place).
    fn chain_square(&mut self);

    /// Multiply this value by `rhs` (in place).
    fn chain_mul(&mut self, rhs: &Self);
}

#[inline(always)]
fn step<T: ChainElement>(acc: &mut T, win: &[T; WINDOW_LEN], s: (u8, u8)) {
    let (n, e) = s;
    for _ in 0..n {
        acc.chain_square();
    }
    acc.chain_mul(&win[(e >> 1) as usize]);
}

/// Raise `x` to the power p751 - 2.
pub(crate) fn pow_p751_minus_2<T: ChainElement>(x: &T) -> T {
    // win[k] = x^(2*k+1)
    let mut x2 = *x;
    x2.chain_square();
    let mut win = [*x; WINDOW_LEN];
    for k in 1..WINDOW_LEN {
        let mut t = win[k - 1];
        t.chain_mul(&x2);
        win[k] = t;
    }

    let mut acc = *x;
    for s in HEAD.iter() {
        step(&mut acc, &win, *s);
    }
    for _ in 0..TAIL_REPS {
        step(&mut acc, &win, TAIL_STEP);
    }
    step(&mut acc, &win, LAST_STEP);
    acc
}

// ========================================================================
