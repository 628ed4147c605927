use kgoertzel::{
    coefficient, estimate_power, kernel, to_dbm, to_dbm_floored, try_coefficient, GoertzelError,
    Vn, POWER_FLOOR,
};

fn sine(f: f64, fs: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * f * i as f64 / fs).sin())
        .collect()
}

/// A 1 kHz detector at 8 kHz sits at an eighth of the sampling rate: 2·cos(π/4) = √2.
#[test]
fn coefficient_reference_value() {
    let c: f64 = coefficient(1000.0, 8000.0);
    assert!((c - std::f64::consts::SQRT_2).abs() < 1e-12, "c = {}", c);
}

/// The coefficient follows 2·cos(2π·f/fs) across the band.
#[test]
fn coefficient_follows_formula() {
    let cases = [(697.0f64, 8000.0f64), (1633.0, 8000.0), (2000.0, 8000.0), (440.0, 44100.0)];
    for (f, fs) in cases {
        let expected = 2.0 * (2.0 * std::f64::consts::PI * f / fs).cos();
        assert!((coefficient(f, fs) - expected).abs() < 1e-12, "f={} fs={}", f, fs);
    }
    assert!(coefficient(2000.0f64, 8000.0).abs() < 1e-12);
}

/// Coefficients below Nyquist stay within [-2, 2].
#[test]
fn coefficient_range_below_nyquist() {
    for fs in [8000.0f64, 11025.0, 44100.0, 48000.0] {
        for step in 0..=100 {
            let f = fs / 2.0 * step as f64 / 100.0;
            let c = coefficient(f, fs);
            assert!((-2.0..=2.0).contains(&c), "f={} fs={} c={}", f, fs, c);
        }
    }
}

/// Zero sampling frequency propagates as a non-finite value instead of failing.
#[test]
fn zero_sampling_frequency_is_not_finite() {
    assert!(!coefficient(1000.0f64, 0.0).is_finite());
    assert_eq!(
        try_coefficient(1000.0f64, 0.0),
        Err(GoertzelError::InvalidSamplingFrequency)
    );
}

/// 8 samples of a unit 1 kHz sine at 8 kHz match a hand-rolled recursion.
#[test]
fn eight_sample_power_matches_reference() {
    let c = 2.0 * (2.0 * std::f64::consts::PI * 1000.0 / 8000.0).cos();
    let samples = sine(1000.0, 8000.0, 8);
    let (mut s1, mut s2) = (0.0, 0.0);
    for &x in &samples {
        let t = c * s1 - s2 + x;
        s2 = s1;
        s1 = t;
    }
    let expected = (s1 * s1 + s2 * s2 - c * s1 * s2) / 64.0;

    let mut vn = Vn::zero();
    let k: f64 = coefficient(1000.0, 8000.0);
    kernel(&samples, k, &mut vn);
    let power = estimate_power(k, vn, samples.len());
    assert!(((power - expected) / expected).abs() < 1e-9);
}

/// Splitting the input across kernel calls yields the same state.
#[test]
fn kernel_composes_across_calls() {
    let c: f64 = coefficient(697.0, 8000.0);
    let samples = sine(697.0, 8000.0, 100);
    let mut whole = Vn::zero();
    kernel(&samples, c, &mut whole);

    let mut split = Vn::zero();
    kernel(&samples[..37], c, &mut split);
    kernel(&samples[37..], c, &mut split);
    assert_eq!(split, whole);
}

/// dBm conversion is strictly increasing for positive power.
#[test]
fn dbm_is_monotonic() {
    let mut prev = f64::NEG_INFINITY;
    for exp in -12..6 {
        let db = to_dbm(10f64.powi(exp));
        assert!(db > prev, "{} <= {}", db, prev);
        prev = db;
    }
}

/// A decade of power is 10 dB.
#[test]
fn dbm_decade_is_ten_db() {
    assert!((to_dbm(1.0f64) - to_dbm(0.1f64) - 10.0).abs() < 1e-12);
}

/// Silence clamps to exactly the documented floor in double precision.
#[test]
fn floored_dbm_uses_exact_floor() {
    assert_eq!(to_dbm_floored(0.0f64), to_dbm(POWER_FLOOR));
    assert_eq!(to_dbm_floored(1e-12f64), to_dbm(1e-9f64));
    assert_eq!(to_dbm_floored(0.5f64), to_dbm(0.5f64));
}
