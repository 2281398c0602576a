//! Harmonic signal — `amplitude * h(2π * frequency * t)`.
//!
//! Deterministic and vectorizable. Both evaluation paths share one formula,
//! so sequential and vectorized output are identical.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::generator::{check_finite, Generator, GeneratorError, Signal};

/// Harmonic function applied to the phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sin,
    Cos,
}

impl Waveform {
    pub fn apply(self, phase: f64) -> f64 {
        match self {
            Self::Sin => phase.sin(),
            Self::Cos => phase.cos(),
        }
    }
}

/// Sinusoidal signal generator.
#[derive(Debug, Clone)]
pub struct Sinusoidal {
    pub amplitude: f64,
    /// Cycles per unit of time.
    pub frequency: f64,
    pub waveform: Waveform,
}

impl Sinusoidal {
    pub fn new(amplitude: f64, frequency: f64) -> Result<Self, GeneratorError> {
        Ok(Self {
            amplitude: check_finite("amplitude", amplitude)?,
            frequency: check_finite("frequency", frequency)?,
            waveform: Waveform::Sin,
        })
    }

    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    fn value_at(&self, time: f64) -> f64 {
        self.amplitude * self.waveform.apply(TAU * self.frequency * time)
    }
}

impl Default for Sinusoidal {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            waveform: Waveform::Sin,
        }
    }
}

impl Generator for Sinusoidal {
    fn name(&self) -> &str {
        "sinusoidal"
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
        Ok(self.value_at(time))
    }

    fn sample_vectorized(&mut self, times: &[f64]) -> Result<Vec<f64>, GeneratorError> {
        Ok(times.iter().map(|&t| self.value_at(t)).collect())
    }
}

impl Signal for Sinusoidal {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn quarter_period_hits_amplitude() {
        let mut sig = Sinusoidal::new(2.5, 0.25).unwrap();
        // frequency 0.25 → period 4 → peak at t = 1
        let v = sig.sample_next(1.0, &[], &[]).unwrap();
        assert!((v - 2.5).abs() < EPS);
    }

    #[test]
    fn cosine_starts_at_amplitude() {
        let mut sig = Sinusoidal::new(3.0, 1.0)
            .unwrap()
            .with_waveform(Waveform::Cos);
        assert!((sig.sample_next(0.0, &[], &[]).unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn vectorized_matches_sequential() {
        let times: Vec<f64> = (0..20).map(|i| i as f64 * 0.37).collect();
        let mut sig = Sinusoidal::new(1.3, 0.7).unwrap();
        let batch = sig.sample_vectorized(&times).unwrap();
        for (i, &t) in times.iter().enumerate() {
            let single = sig.sample_next(t, &[], &[]).unwrap();
            assert!((batch[i] - single).abs() < EPS);
        }
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(Sinusoidal::new(f64::NAN, 1.0).is_err());
        assert!(Sinusoidal::new(1.0, f64::INFINITY).is_err());
    }
}
