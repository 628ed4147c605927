use kgoertzel::{coefficient, kernel, to_dbm, Goertzel64, Vn};
use proptest::prelude::*;

proptest! {
    /// Feeding a sequence in two calls gives the same state as one call.
    #[test]
    fn kernel_is_composable(
        samples in prop::collection::vec(-1.0f64..1.0, 0..256),
        split in any::<prop::sample::Index>(),
        f in 0.0f64..4000.0,
    ) {
        let c = coefficient(f, 8000.0);
        let at = split.index(samples.len() + 1);
        let mut whole = Vn::zero();
        kernel(&samples, c, &mut whole);
        let mut parts = Vn::zero();
        kernel(&samples[..at], c, &mut parts);
        kernel(&samples[at..], c, &mut parts);
        prop_assert_eq!(parts, whole);
    }

    /// Resetting and reprocessing reproduces the power bit for bit.
    #[test]
    fn reset_reproduces_power(
        samples in prop::collection::vec(-1.0f64..1.0, 1..256),
        f in 0.0f64..4000.0,
    ) {
        let mut filter = Goertzel64::new(f, 8000.0);
        let first = filter.process(&samples);
        filter.reset();
        let second = filter.process(&samples);
        prop_assert!(first == second || (first.is_nan() && second.is_nan()));
    }

    /// dBm preserves ordering of positive powers.
    #[test]
    fn dbm_is_monotonic(a in 1e-12f64..1e6, b in 1e-12f64..1e6) {
        prop_assume!(a < b);
        prop_assert!(to_dbm(a) <= to_dbm(b));
    }

    /// Coefficients for sub-Nyquist frequencies stay in [-2, 2].
    #[test]
    fn coefficient_in_range(fs in 1.0f64..200_000.0, ratio in 0.0f64..=0.5) {
        let c = coefficient(fs * ratio, fs);
        prop_assert!((-2.0..=2.0).contains(&c));
    }
}
