//! Continuous autoregressive (CAR) signal for irregularly sampled time.
//!
//! The first call returns `start_value`. Every later call decays the previous
//! value by the elapsed time and adds a matching amount of fresh noise:
//!
//! x[t] = φ^Δt · x[prev] + σ · sqrt(1 − φ^Δt) · ε,  ε ~ N(0, 1)

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::generator::{check_finite, check_std, time_delta, Generator, GeneratorError, Signal};
use crate::rng::SeriesRng;

/// CAR(1) signal generator.
#[derive(Debug, Clone)]
pub struct Car<R = SeriesRng> {
    /// Decay per unit time, in (0, 1].
    pub ar_param: f64,
    pub sigma: f64,
    pub start_value: f64,
    previous: Option<(f64, f64)>,
    rng: R,
}

impl<R: Rng> Car<R> {
    pub fn new(ar_param: f64, sigma: f64, start_value: f64, rng: R) -> Result<Self, GeneratorError> {
        if !(ar_param > 0.0 && ar_param <= 1.0) {
            return Err(GeneratorError::InvalidParameter {
                param: "ar_param",
                value: ar_param,
            });
        }
        Ok(Self {
            ar_param,
            sigma: check_std("sigma", sigma)?,
            start_value: check_finite("start_value", start_value)?,
            previous: None,
            rng,
        })
    }
}

impl<R: Rng + Send> Generator for Car<R> {
    fn name(&self) -> &str {
        "car"
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
                let decay = self.ar_param.powf(time_delta(prev_time, time)?);
                let eps: f64 = StandardNormal.sample(&mut self.rng);
                decay * prev_value + self.sigma * (1.0 - decay).sqrt() * eps
            }
        };
        self.previous = Some((time, value));
        Ok(value)
    }

    fn reset(&mut self) {
        self.previous = None;
    }
}

impl<R: Rng + Send> Signal for Car<R> {}
