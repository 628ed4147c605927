//! Goertzel algorithm: recursive single-tone power detector
//! no_std compatible, no allocation
//!
//! The free functions expose each stage of the computation (coefficient,
//! recursion, power, dBm) so callers can compose them directly. They follow
//! plain IEEE-754 semantics: invalid parameters yield NaN or infinity rather
//! than an error. [`GoertzelFilter`] bundles the stages behind a stateful
//! handle that tracks how many samples it has accumulated.

use core::fmt;

use crate::error::GoertzelError;
use crate::num::Float;

/// Power values below this are treated as silence by [`to_dbm_floored`].
pub const POWER_FLOOR: f64 = 1e-9;

/// Reference impedance in ohms used for the dBm scale (audio/telephony).
const REFERENCE_OHMS: f32 = 600.0;

/// Compute the Goertzel coefficient `2·cos(2π·f/fs)`.
///
/// No validation is performed: `fs == 0` yields a non-finite coefficient.
/// Use [`try_coefficient`] to reject unusable parameters.
#[inline]
pub fn coefficient<T: Float>(frequency: T, sampling_frequency: T) -> T {
    let two = T::one() + T::one();
    two * (two * T::pi() * frequency / sampling_frequency).cos()
}

/// Checked variant of [`coefficient`].
///
/// Requires a finite, positive `sampling_frequency` and a finite target
/// `frequency` in `0..=sampling_frequency / 2`.
pub fn try_coefficient<T: Float>(frequency: T, sampling_frequency: T) -> Result<T, GoertzelError> {
    validate(frequency, sampling_frequency)?;
    Ok(coefficient(frequency, sampling_frequency))
}

pub(crate) fn validate<T: Float>(frequency: T, sampling_frequency: T) -> Result<(), GoertzelError> {
    let result = if !sampling_frequency.is_finite() || sampling_frequency <= T::zero() {
        Err(GoertzelError::InvalidSamplingFrequency)
    } else if !frequency.is_finite() || frequency < T::zero() {
        Err(GoertzelError::InvalidFrequency)
    } else if frequency > sampling_frequency / (T::one() + T::one()) {
        Err(GoertzelError::AboveNyquist)
    } else {
        Ok(())
    };
    if let Err(_err) = result {
        vlog!(
            warn,
            "rejected goertzel parameters f={:?} fs={:?}: {}",
            frequency,
            sampling_frequency,
            _err
        );
    }
    result
}

/// The two most recent outputs of the Goertzel recursion.
///
/// `s1` is the latest value, `s2` the one before it. The default value is
/// the zeroed state every detection starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vn<T: Float> {
    pub s1: T,
    pub s2: T,
}

impl<T: Float> Vn<T> {
    pub fn new(s1: T, s2: T) -> Self {
        Self { s1, s2 }
    }

    pub fn zero() -> Self {
        Self {
            s1: T::zero(),
            s2: T::zero(),
        }
    }

    /// Advance the recursion by one sample.
    #[inline(always)]
    pub fn push(&mut self, sample: T, coefficient: T) {
        let s = coefficient * self.s1 - self.s2 + sample;
        self.s2 = self.s1;
        self.s1 = s;
    }

    pub fn reset(&mut self) {
        *self = Self::zero();
    }
}

impl<T: Float> Default for Vn<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Run the Goertzel recursion over `samples`, updating `vn` in place.
///
/// Samples are consumed strictly in order. An empty slice leaves `vn`
/// untouched, and feeding a sequence in several calls yields the same state
/// as feeding it in one.
pub fn kernel<T: Float>(samples: &[T], coefficient: T, vn: &mut Vn<T>) {
    for &x in samples {
        vn.push(x, coefficient);
    }
}

/// Estimate the power of the target tone from the recursion state.
///
/// `n` must be the number of samples fed into `vn` since it was last zeroed.
/// Returns `(s1² + s2² − c·s1·s2) / n²`; `n == 0` yields NaN or infinity.
#[inline]
pub fn estimate_power<T: Float>(coefficient: T, vn: Vn<T>, n: usize) -> T {
    let magnitude = vn.s1 * vn.s1 + vn.s2 * vn.s2 - coefficient * vn.s1 * vn.s2;
    let n = T::from_usize(n);
    magnitude / (n * n)
}

/// Convert a power value into dBm against a 600 Ω reference.
///
/// Zero power gives negative infinity and negative power gives NaN.
#[inline]
pub fn to_dbm<T: Float>(power: T) -> T {
    let two = T::one() + T::one();
    let ten = T::from_f32(10.0);
    let milliwatts = T::from_f32(1000.0);
    ten * (two * power * milliwatts / T::from_f32(REFERENCE_OHMS)).log10()
}

/// Like [`to_dbm`], but clamps the power to [`POWER_FLOOR`] first so silent
/// or degenerate blocks map to a finite level.
pub fn to_dbm_floored<T: Float>(power: T) -> T {
    let floor = T::from_f64(POWER_FLOOR);
    // NaN fails the comparison and is clamped as well
    let power = if power >= floor { power } else { floor };
    to_dbm(power)
}

/// Run a fresh recursion over a complete block with a known coefficient and
/// return its level in dBm.
pub fn process_samples_with_coefficient<T: Float>(samples: &[T], coefficient: T) -> T {
    let mut vn = Vn::zero();
    kernel(samples, coefficient, &mut vn);
    to_dbm(estimate_power(coefficient, vn, samples.len()))
}

/// Return the level in dBm of the `frequency` component of a complete block
/// sampled at `sampling_frequency`.
pub fn process_samples<T: Float>(samples: &[T], frequency: T, sampling_frequency: T) -> T {
    process_samples_with_coefficient(samples, coefficient(frequency, sampling_frequency))
}

/// A Goertzel detector tuned to one frequency.
///
/// The filter accumulates samples across [`process`](Self::process) calls
/// until [`reset`](Self::reset), and normalizes the reported power by the
/// total number of samples seen since then. Splitting one logical block into
/// several calls therefore reports the same final power as a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct GoertzelFilter<T: Float> {
    frequency: T,
    sampling_frequency: T,
    coefficient: T,
    vn: Vn<T>,
    count: usize,
}

impl<T: Float> GoertzelFilter<T> {
    /// Create a filter for `frequency` at `sampling_frequency` (both in Hz).
    ///
    /// Parameters are not validated; see [`try_new`](Self::try_new).
    pub fn new(frequency: T, sampling_frequency: T) -> Self {
        let coefficient = coefficient(frequency, sampling_frequency);
        vlog!(
            debug,
            "goertzel filter f={:?} fs={:?} coefficient={:?}",
            frequency,
            sampling_frequency,
            coefficient
        );
        Self {
            frequency,
            sampling_frequency,
            coefficient,
            vn: Vn::zero(),
            count: 0,
        }
    }

    /// Create a filter after checking the parameters.
    ///
    /// # Errors
    /// Returns a [`GoertzelError`] if the sampling frequency is not positive,
    /// the target frequency is negative or non-finite, or it lies above the
    /// Nyquist frequency.
    pub fn try_new(frequency: T, sampling_frequency: T) -> Result<Self, GoertzelError> {
        validate(frequency, sampling_frequency)?;
        Ok(Self::new(frequency, sampling_frequency))
    }

    pub fn frequency(&self) -> T {
        self.frequency
    }

    pub fn sampling_frequency(&self) -> T {
        self.sampling_frequency
    }

    pub fn coefficient(&self) -> T {
        self.coefficient
    }

    pub fn state(&self) -> Vn<T> {
        self.vn
    }

    /// Number of samples accumulated since construction or the last reset.
    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Feed `samples` through the filter and return the power of everything
    /// accumulated since the last reset.
    ///
    /// Calling this on a freshly reset filter with an empty slice returns NaN.
    pub fn process(&mut self, samples: &[T]) -> T {
        kernel(samples, self.coefficient, &mut self.vn);
        self.count += samples.len();
        self.power()
    }

    /// [`process`](Self::process) followed by [`to_dbm`].
    pub fn process_dbm(&mut self, samples: &[T]) -> T {
        to_dbm(self.process(samples))
    }

    /// Feed a single sample without computing the power.
    #[inline]
    pub fn push(&mut self, sample: T) {
        self.vn.push(sample, self.coefficient);
        self.count += 1;
    }

    /// Power of the samples accumulated since the last reset.
    pub fn power(&self) -> T {
        estimate_power(self.coefficient, self.vn, self.count)
    }

    pub fn dbm(&self) -> T {
        to_dbm(self.power())
    }

    /// Discard the accumulated state so the next call starts a new block.
    pub fn reset(&mut self) {
        vlog!(
            trace,
            "goertzel filter f={:?} reset after {} samples",
            self.frequency,
            self.count
        );
        self.vn.reset();
        self.count = 0;
    }
}

impl<T: Float> fmt::Display for GoertzelFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Goertzel {} Hz @ {} Hz (coefficient {}, {} samples, state [{}, {}])",
            self.frequency,
            self.sampling_frequency,
            self.coefficient,
            self.count,
            self.vn.s1,
            self.vn.s2
        )
    }
}

/// Goertzel filter in double precision.
pub type Goertzel64 = GoertzelFilter<f64>;
/// Goertzel filter in single precision.
pub type Goertzel32 = GoertzelFilter<f32>;
