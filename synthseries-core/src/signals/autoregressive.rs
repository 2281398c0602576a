//! Autoregressive AR(p) signal.
//!
//! x[t] = φ1·x[t-1] + φ2·x[t-2] + … + φp·x[t-p] + N(0, σ)
//!
//! The window of the last p values is seeded from `start_value` (oldest
//! first) and shifts by one on every call. Intended for regularly sampled
//! time: the timestamp itself is ignored.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;

use crate::generator::{check_finite, check_std, Generator, GeneratorError, Signal};
use crate::rng::SeriesRng;

/// AR(p) signal generator.
#[derive(Debug, Clone)]
pub struct AutoRegressive<R = SeriesRng> {
    /// Lag coefficients `[φ1, …, φp]`; φ1 weights the most recent value.
    coefficients: Vec<f64>,
    start_value: Vec<f64>,
    window: VecDeque<f64>,
    innovation: Normal<f64>,
    rng: R,
}

impl<R: Rng> AutoRegressive<R> {
    /// Build an AR(p) generator.
    ///
    /// `start_value` defaults to zeros when `None`. Otherwise it must have
    /// exactly one entry per coefficient.
    pub fn new(
        coefficients: Vec<f64>,
        sigma: f64,
        start_value: Option<Vec<f64>>,
        rng: R,
    ) -> Result<Self, GeneratorError> {
        if coefficients.is_empty() {
            return Err(GeneratorError::EmptyLag);
        }
        for &c in &coefficients {
            check_finite("ar_param", c)?;
        }
        let start_value = match start_value {
            Some(values) if values.len() != coefficients.len() => {
                return Err(GeneratorError::LagMismatch {
                    coefficients: coefficients.len(),
                    initial_values: values.len(),
                });
            }
            Some(values) => {
                for &v in &values {
                    check_finite("start_value", v)?;
                }
                values
            }
            None => vec![0.0; coefficients.len()],
        };
        let sigma = check_std("sigma", sigma)?;
        let innovation = Normal::new(0.0, sigma).map_err(|_| GeneratorError::InvalidParameter {
            param: "sigma",
            value: sigma,
        })?;

        Ok(Self {
            window: start_value.iter().copied().collect(),
            coefficients,
            start_value,
            innovation,
            rng,
        })
    }

    /// Lag order p.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }
}

impl<R: Rng + Send> Generator for AutoRegressive<R> {
    fn name(&self) -> &str {
        "auto_regressive"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(
        &mut self,
        _time: f64,
        _samples: &[f64],
        _errors: &[f64],
    ) -> Result<f64, GeneratorError> {
        // window is oldest-first, so walk it backwards to pair φ1 with x[t-1]
        let lagged: f64 = self
            .coefficients
            .iter()
            .zip(self.window.iter().rev())
            .map(|(phi, x)| phi * x)
            .sum();
        let value = lagged + self.innovation.sample(&mut self.rng);

        self.window.pop_front();
        self.window.push_back(value);
        Ok(value)
    }

    fn reset(&mut self) {
        self.window = self.start_value.iter().copied().collect();
    }
}

impl<R: Rng + Send> Signal for AutoRegressive<R> {}
