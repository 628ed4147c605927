//! Sample-by-sample detection of a DTMF row tone.
//!
//! Simulates samples arriving one at a time and prints a level for every
//! completed 205-sample block (the classic DTMF block length at 8 kHz).

use kgoertzel::{to_dbm_floored, GoertzelBlock};

const FS: f64 = 8000.0;
const BLOCK: usize = 205;

fn main() {
    println!("=== kgoertzel Block Detector Example ===\n");

    let mut tone = GoertzelBlock::new(770.0, FS, BLOCK);
    let mut other = GoertzelBlock::new(1336.0, FS, BLOCK);

    // Two blocks of 770 Hz followed by two blocks of silence
    let n = 4 * BLOCK;
    for i in 0..n {
        let x = if i < 2 * BLOCK {
            (2.0 * std::f64::consts::PI * 770.0 * i as f64 / FS).sin()
        } else {
            0.0
        };
        // Silent blocks have zero power, so clamp before taking the log
        let on = tone.push(x).map(to_dbm_floored);
        let off = other.push(x).map(to_dbm_floored);
        if let (Some(on), Some(off)) = (on, off) {
            println!(
                "   block {}: 770 Hz {on:>8.2} dBm, 1336 Hz {off:>8.2} dBm",
                i / BLOCK
            );
        }
    }
}
