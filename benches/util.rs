// Cycle counter for benchmarks. On targets without an accessible
// cycle counter, elapsed nanoseconds are reported instead.

#[cfg(target_arch = "x86_64")]
pub fn core_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(target_arch = "aarch64")]
pub fn core_cycles() -> u64 {
    use core::arch::asm;
    let mut x: u64;
    unsafe {
        asm!("dsb sy", "mrs {}, pmccntr_el0", out(reg) x);
    }
    x
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn core_cycles() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

// Run f() 30 times, and return the median of the last 10 runs.
pub fn median<F: FnMut()>(mut f: F) -> u64 {
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        f();
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    tt[4]
}
