//! Gaussian white noise — independent `N(mean, std)` draws per sample.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::generator::{check_finite, check_std, Generator, GeneratorError, Noise};
use crate::rng::SeriesRng;

/// Uncorrelated additive Gaussian noise.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R = SeriesRng> {
    dist: Normal<f64>,
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    pub fn new(mean: f64, std: f64, rng: R) -> Result<Self, GeneratorError> {
        let mean = check_finite("mean", mean)?;
        let std = check_std("std", std)?;
        let dist = Normal::new(mean, std).map_err(|_| GeneratorError::InvalidParameter {
            param: "std",
            value: std,
        })?;
        Ok(Self { dist, rng })
    }

    pub fn mean(&self) -> f64 {
        self.dist.mean()
    }

    pub fn std(&self) -> f64 {
        self.dist.std_dev()
    }
}

impl<R: Rng + Send> Generator for GaussianNoise<R> {
    fn name(&self) -> &str {
        "gaussian"
    }

    fn is_vectorizable(&self) -> bool {
        true
    }

    fn sample_next(
        &mut self,
        _time: f64,
        _samples: &[f64],
        _errors: &[f64],
    ) -> Result<f64, GeneratorError> {
        Ok(self.dist.sample(&mut self.rng))
    }

    fn sample_vectorized(&mut self, times: &[f64]) -> Result<Vec<f64>, GeneratorError> {
        Ok((&self.dist)
            .sample_iter(&mut self.rng)
            .take(times.len())
            .collect())
    }
}

impl<R: Rng + Send> Noise for GaussianNoise<R> {}
