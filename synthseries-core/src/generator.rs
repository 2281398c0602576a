//! Generator capability — the contract every signal and noise source implements.
//!
//! Two evaluation paths exist:
//! - `sample_next`: one value at a time, given the history of everything the
//!   series has produced so far. Every generator implements it.
//! - `sample_vectorized`: the whole timestamp sequence at once. Only generators
//!   whose `is_vectorizable()` is true implement it; the default body reports a
//!   contract violation instead of silently degrading.
//!
//! Signal and noise sources share the contract and differ only by role, which
//! is expressed through the `Signal` and `Noise` marker traits.

use thiserror::Error;

/// Errors raised by generators, at construction or while sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("lag coefficient list has {coefficients} entries but {initial_values} initial values were given")]
    LagMismatch {
        coefficients: usize,
        initial_values: usize,
    },
    #[error("lag coefficient list must not be empty")]
    EmptyLag,
    #[error("invalid value for '{param}': {value}")]
    InvalidParameter { param: &'static str, value: f64 },
    #[error("generator '{0}' does not support vectorized sampling")]
    NotVectorizable(String),
    #[error("generator '{generator}' returned {actual} values for {expected} timestamps")]
    OutputLength {
        generator: String,
        expected: usize,
        actual: usize,
    },
    #[error("time went backwards: previous sample at {previous}, requested {current}")]
    NonMonotonicTime { previous: f64, current: f64 },
}

/// Capability shared by signal and noise sources.
///
/// # Single-pass ownership
/// Sequential generators carry mutable history between `sample_next` calls.
/// One instance serves one sampling pass; call `reset()` before reusing it.
pub trait Generator: Send {
    /// Human-readable name (e.g., "sinusoidal").
    fn name(&self) -> &str;

    /// Whether `sample_vectorized` is supported. Fixed at construction.
    fn is_vectorizable(&self) -> bool;

    /// Produce the value at `time`.
    ///
    /// `samples` and `errors` hold the combined series and the noise component
    /// for every index strictly before the current one.
    fn sample_next(
        &mut self,
        time: f64,
        samples: &[f64],
        errors: &[f64],
    ) -> Result<f64, GeneratorError>;

    /// Produce one value per timestamp in a single call.
    fn sample_vectorized(&mut self, _times: &[f64]) -> Result<Vec<f64>, GeneratorError> {
        Err(GeneratorError::NotVectorizable(self.name().to_string()))
    }

    /// Restore the state the generator had right after construction.
    ///
    /// The randomness source is not rewound.
    fn reset(&mut self) {}
}

/// A generator producing the underlying signal.
pub trait Signal: Generator {}

/// A generator producing additive noise.
pub trait Noise: Generator {}

/// Reject NaN and infinities.
pub(crate) fn check_finite(param: &'static str, value: f64) -> Result<f64, GeneratorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeneratorError::InvalidParameter { param, value })
    }
}

/// Standard deviations must be finite and non-negative.
pub(crate) fn check_std(param: &'static str, value: f64) -> Result<f64, GeneratorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeneratorError::InvalidParameter { param, value })
    }
}

/// Elapsed time since the previous sample, refusing to run backwards.
pub(crate) fn time_delta(previous: f64, current: f64) -> Result<f64, GeneratorError> {
    let dt = current - previous;
    if dt < 0.0 || dt.is_nan() {
        return Err(GeneratorError::NonMonotonicTime { previous, current });
    }
    Ok(dt)
}
