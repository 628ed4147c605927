//! Basic usage example for kgoertzel
//!
//! Walks through each stage of the Goertzel computation and the stateful
//! filter built on top of it.

use kgoertzel::{coefficient, estimate_power, kernel, to_dbm, Goertzel64, Vn};

fn main() {
    println!("=== kgoertzel Basic Usage Example ===\n");

    let fs = 8000.0;
    let f = 2000.0;

    // 1. Individual stages
    println!("1. Stage by stage");
    let c = coefficient(f, fs);
    let samples = [0.0, 1.0, 0.0, -1.0];
    let mut vn = Vn::zero();
    kernel(&samples, c, &mut vn);
    let power = estimate_power(c, vn, samples.len());
    println!("   Coefficient: {c:.6}");
    println!("   State: s1={:.3} s2={:.3}", vn.s1, vn.s2);
    println!("   Power: {power:.6} ({:.2} dBm)\n", to_dbm(power));

    // 2. Stateful filter
    println!("2. Filter handle");
    let mut filter = Goertzel64::new(f, fs);
    let power = filter.process(&samples);
    println!("   {filter}");
    println!("   Power: {power:.6} ({:.2} dBm)", to_dbm(power));

    // Feeding the same block again keeps accumulating
    filter.process(&samples);
    println!("   After a second block: {:.2} dBm", filter.dbm());

    filter.reset();
    println!("   After reset: {} samples accumulated\n", filter.sample_count());

    // 3. Checked construction
    println!("3. Parameter validation");
    match Goertzel64::try_new(5000.0, fs) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   5000 Hz @ {fs} Hz rejected: {e}"),
    }
}
