//! # kgoertzel - Goertzel single-tone detection for Rust
//!
//! Detects the presence and power of one frequency in a block of samples
//! without computing a full spectrum. Works on MCUs and desktops alike.
//!
//! ## Features
//!
//! - **Zero-allocation** recursive kernel, suitable for interrupt handlers
//! - **Stateful filter** that accumulates samples across calls and tracks
//!   its own sample count
//! - **Block detector** for sample-by-sample streams
//! - **dBm conversion** against the 600 Ω telephony reference
//! - Generic over `f32` and `f64`
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`GoertzelError`]
//! - `verbose-logging`: emit `log` records for filter construction, resets,
//!   completed blocks and rejected parameters
//! - `internal-tests`: property tests inside the crate (pulls in `proptest`
//!   and `rand`)
//!
//! ## Example
//!
//! ```
//! use kgoertzel::{to_dbm, Goertzel64};
//!
//! let fs = 8000.0;
//! let samples: Vec<f64> = (0..205)
//!     .map(|i| (2.0 * std::f64::consts::PI * 697.0 * i as f64 / fs).sin())
//!     .collect();
//!
//! let mut filter = Goertzel64::new(697.0, fs);
//! let power = filter.process(&samples);
//! assert!(to_dbm(power) > -10.0);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Logging compiles away unless `verbose-logging` is enabled
#[cfg(feature = "verbose-logging")]
macro_rules! vlog {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! vlog {
    ($level:ident, $($arg:tt)+) => {};
}

/// Floating-point abstraction shared by every detector.
pub mod num;

/// Parameter validation errors
pub mod error;

/// Goertzel algorithm
///
/// Coefficient, recursion, power and dBm stages plus the stateful filter.
pub mod goertzel;

/// Fixed-length block detection
pub mod block;

pub use block::GoertzelBlock;
pub use error::GoertzelError;
pub use goertzel::{
    coefficient, estimate_power, kernel, process_samples, process_samples_with_coefficient,
    to_dbm, to_dbm_floored, try_coefficient, Goertzel32, Goertzel64, GoertzelFilter, Vn,
    POWER_FLOOR,
};
pub use num::Float;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn noise(seed: u64, n: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }

    #[test]
    fn chunked_processing_matches_single_call() {
        let samples = noise(42, 300);
        let mut whole = Goertzel64::new(1209.0, 8000.0);
        let expected = whole.process(&samples);

        let mut chunked = Goertzel64::new(1209.0, 8000.0);
        let mut last = f64::NAN;
        for chunk in samples.chunks(7) {
            last = chunked.process(chunk);
        }
        assert_eq!(chunked.state(), whole.state());
        assert_eq!(chunked.sample_count(), 300);
        assert!((last - expected).abs() <= expected.abs() * 1e-12);
    }

    proptest! {
        #[test]
        fn coefficient_stays_in_range(fs in 1.0f64..192_000.0, ratio in 0.0f64..=0.5) {
            let c = coefficient(fs * ratio, fs);
            prop_assert!((-2.0..=2.0).contains(&c));
        }

        #[test]
        fn reset_reproduces_power(seed in any::<u64>(), len in 1usize..512) {
            let samples = noise(seed, len);
            let mut filter = Goertzel64::new(941.0, 8000.0);
            let first = filter.process(&samples);
            filter.reset();
            prop_assert_eq!(filter.process(&samples), first);
        }
    }
}
