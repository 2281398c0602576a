//! Pseudo-periodic signal — a harmonic wave whose amplitude and frequency
//! jitter independently at every sample.
//!
//! Each value is `A * h(F * t)`, `h` being sine or cosine, with `A ~ N(amplitude, amplitude_sd)` and
//! `F ~ N(frequency, frequency_sd)`. Here `frequency` is an angular rate; no
//! 2π factor is applied.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::generator::{check_finite, check_std, Generator, GeneratorError, Signal};
use crate::rng::SeriesRng;
use crate::signals::Waveform;

/// Pseudo-periodic signal generator.
#[derive(Debug, Clone)]
pub struct PseudoPeriodic<R = SeriesRng> {
    amplitude: Normal<f64>,
    frequency: Normal<f64>,
    waveform: Waveform,
    rng: R,
}

impl<R: Rng> PseudoPeriodic<R> {
    pub fn new(
        amplitude: f64,
        frequency: f64,
        amplitude_sd: f64,
        frequency_sd: f64,
        rng: R,
    ) -> Result<Self, GeneratorError> {
        let amplitude = check_finite("amplitude", amplitude)?;
        let frequency = check_finite("frequency", frequency)?;
        let amplitude_sd = check_std("amplitude_sd", amplitude_sd)?;
        let frequency_sd = check_std("frequency_sd", frequency_sd)?;
        Ok(Self {
            amplitude: normal("amplitude_sd", amplitude, amplitude_sd)?,
            frequency: normal("frequency_sd", frequency, frequency_sd)?,
            waveform: Waveform::Sin,
            rng,
        })
    }

    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    fn draw(&mut self, time: f64) -> f64 {
        let a = self.amplitude.sample(&mut self.rng);
        let f = self.frequency.sample(&mut self.rng);
        a * self.waveform.apply(f * time)
    }
}

fn normal(param: &'static str, mean: f64, std: f64) -> Result<Normal<f64>, GeneratorError> {
    Normal::new(mean, std).map_err(|_| GeneratorError::InvalidParameter { param, value: std })
}

impl<R: Rng + Send> Generator for PseudoPeriodic<R> {
    fn name(&self) -> &str {
        "pseudo_periodic"
    }

    fn is_vectorizable(&self) -> bool {
        true
    }

    fn sample_next(
        &mut self,
        time: f64,
        _samples: &[f64],
        _errors: &[f64],
    ) -> Result<f64, GeneratorError> {
        Ok(self.draw(time))
    }

    fn sample_vectorized(&mut self, times: &[f64]) -> Result<Vec<f64>, GeneratorError> {
        Ok(times.iter().map(|&t| self.draw(t)).collect())
    }
}

impl<R: Rng + Send> Signal for PseudoPeriodic<R> {}
