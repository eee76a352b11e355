mod util;
use util::{core_cycles, median};

use fp751::backend::w64::fp751::NWORDS_FIELD;
use fp751::field::{GFp751, GFp751x2};
use fp751::point::{swap_points, PointProj};

fn seed_limbs() -> [u64; NWORDS_FIELD] {
    let z = core_cycles();
    let mut x = [0u64; NWORDS_FIELD];
    for i in 0..NWORDS_FIELD {
        x[i] = z.wrapping_mul(2 * (i as u64) + 3);
    }
    x
}

fn seed_fp() -> GFp751 {
    GFp751::from_w64le(&seed_limbs())
}

fn seed_fp2() -> GFp751x2 {
    let x = seed_limbs();
    let mut y = x;
    y.reverse();
    GFp751x2::from_w64le(&x, &y)
}

fn bench_gfp751_add() {
    let mut x = seed_fp();
    let mut y = x + GFp751::ONE;
    let t = median(|| {
        for _ in 0..1000 {
            x += y;
            y += x;
            x += y;
            y += x;
            x += y;
            y += x;
        }
    });
    println!("GFp751 add:           {:11.2}  ({})", (t as f64) / 6000.0, x.to_w64le()[0]);
}

fn bench_gfp751_mul() {
    let mut x = seed_fp();
    let mut y = x + GFp751::ONE;
    let t = median(|| {
        for _ in 0..1000 {
            x *= y;
            y *= x;
            x *= y;
            y *= x;
            x *= y;
            y *= x;
        }
    });
    println!("GFp751 mul:           {:11.2}  ({})", (t as f64) / 6000.0, x.to_w64le()[0]);
}

fn bench_gfp751_square() {
    let mut x = seed_fp();
    let t = median(|| {
        x.set_xsquare(6000);
    });
    println!("GFp751 square:        {:11.2}  ({})", (t as f64) / 6000.0, x.to_w64le()[0]);
}

fn bench_gfp751_invert() {
    let mut x = seed_fp();
    let t = median(|| {
        for _ in 0..10 {
            x.set_invert();
            x += GFp751::ONE;
        }
    });
    println!("GFp751 invert:        {:11.2}  ({})", (t as f64) / 10.0, x.to_w64le()[0]);
}

fn bench_gfp751x2_mul() {
    let mut x = seed_fp2();
    let mut y = x + GFp751x2::I;
    let t = median(|| {
        for _ in 0..1000 {
            x *= y;
            y *= x;
        }
    });
    println!("GFp751x2 mul:         {:11.2}  ({})", (t as f64) / 2000.0, x.to_w64le()[0][0]);
}

fn bench_gfp751x2_square() {
    let mut x = seed_fp2();
    let t = median(|| {
        x.set_xsquare(2000);
    });
    println!("GFp751x2 square:      {:11.2}  ({})", (t as f64) / 2000.0, x.to_w64le()[0][0]);
}

fn bench_gfp751x2_invert() {
    let mut x = seed_fp2();
    let t = median(|| {
        for _ in 0..10 {
            x.set_invert();
            x += GFp751x2::ONE;
        }
    });
    println!("GFp751x2 invert:      {:11.2}  ({})", (t as f64) / 10.0, x.to_w64le()[0][0]);
}

#[allow(non_snake_case)]
fn bench_swap_points() {
    let x = seed_fp2();
    let mut P = PointProj::new(x, x + GFp751x2::ONE);
    let mut Q = PointProj::new(x + GFp751x2::I, x - GFp751x2::ONE);
    let mut m = core_cycles() & 1;
    let t = median(|| {
        for _ in 0..1000 {
            swap_points(&mut P, &mut Q, m.wrapping_neg());
            m ^= 1;
        }
    });
    println!("swap_points:          {:11.2}  ({})", (t as f64) / 1000.0, P.X.to_mont_limbs()[0][0]);
}

fn main() {
    bench_gfp751_add();
    bench_gfp751_mul();
    bench_gfp751_square();
    bench_gfp751_invert();
    bench_gfp751x2_mul();
    bench_gfp751x2_square();
    bench_gfp751x2_invert();
    bench_swap_points();
}
