//! Red (correlated) noise.
//!
//! The first call returns `start_value`. After that, with Δt the elapsed time
//! and `w ~ N(mean, std)`:
//!
//! x[t] = τ / (τ + Δt) · (Δt · w + x[prev])

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::generator::{check_finite, check_std, time_delta, Generator, GeneratorError, Noise};
use crate::rng::SeriesRng;

/// Correlated additive noise with correlation time `tau`.
#[derive(Debug, Clone)]
pub struct RedNoise<R = SeriesRng> {
    pub tau: f64,
    pub start_value: f64,
    white: Normal<f64>,
    previous: Option<(f64, f64)>,
    rng: R,
}

impl<R: Rng> RedNoise<R> {
    pub fn new(
        mean: f64,
        std: f64,
        tau: f64,
        start_value: f64,
        rng: R,
    ) -> Result<Self, GeneratorError> {
        let mean = check_finite("mean", mean)?;
        let std = check_std("std", std)?;
        if !(tau.is_finite() && tau > 0.0) {
            return Err(GeneratorError::InvalidParameter {
                param: "tau",
                value: tau,
            });
        }
        let white = Normal::new(mean, std).map_err(|_| GeneratorError::InvalidParameter {
            param: "std",
            value: std,
        })?;
        Ok(Self {
            tau,
            start_value: check_finite("start_value", start_value)?,
            white,
            previous: None,
            rng,
        })
    }
}

impl<R: Rng + Send> Generator for RedNoise<R> {
    fn name(&self) -> &str {
        "red"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(
        &mut self,
        time: f64,
        _samples: &[f64],
        _errors: &[f64],
    ) -> Result<f64, GeneratorError> {
        let value = match self.previous {
            None => self.start_value,
            Some((prev_time, prev_value)) => {
                let dt = time_delta(prev_time, time)?;
                let w = self.white.sample(&mut self.rng);
                (self.tau / (self.tau + dt)) * (dt * w + prev_value)
            }
        };
        self.previous = Some((time, value));
        Ok(value)
    }

    fn reset(&mut self) {
        self.previous = None;
    }
}

impl<R: Rng + Send> Noise for RedNoise<R> {}
