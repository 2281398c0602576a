//! Factory system — converts `SignalConfig` / `NoiseConfig` into runtime
//! trait objects.
//!
//! Construction errors (mismatched lag lists, invalid deviations) surface
//! here, before any sampling happens.

use rand::Rng;

use crate::config::{NoiseConfig, SignalConfig};
use crate::generator::{GeneratorError, Noise, Signal};
use crate::noise::{GaussianNoise, RedNoise};
use crate::signals::{AutoRegressive, Car, PseudoPeriodic, Sinusoidal};

// ─── Signal factory ──────────────────────────────────────────────────

/// Create a signal generator from a `SignalConfig`.
///
/// Random signals take ownership of `rng`; deterministic ones drop it.
pub fn create_signal<R>(config: &SignalConfig, rng: R) -> Result<Box<dyn Signal>, GeneratorError>
where
    R: Rng + Send + 'static,
{
    match config {
        SignalConfig::Sinusoidal {
            amplitude,
            frequency,
            waveform,
        } => Ok(Box::new(
            Sinusoidal::new(*amplitude, *frequency)?.with_waveform(*waveform),
        )),
        SignalConfig::PseudoPeriodic {
            amplitude,
            frequency,
            amplitude_sd,
            frequency_sd,
            waveform,
        } => Ok(Box::new(
            PseudoPeriodic::new(*amplitude, *frequency, *amplitude_sd, *frequency_sd, rng)?
                .with_waveform(*waveform),
        )),
        SignalConfig::AutoRegressive {
            ar_param,
            sigma,
            start_value,
        } => Ok(Box::new(AutoRegressive::new(
            ar_param.clone(),
            *sigma,
            start_value.clone(),
            rng,
        )?)),
        SignalConfig::Car {
            ar_param,
            sigma,
            start_value,
        } => Ok(Box::new(Car::new(*ar_param, *sigma, *start_value, rng)?)),
    }
}

// ─── Noise factory ───────────────────────────────────────────────────

/// Create a noise generator from a `NoiseConfig`.
pub fn create_noise<R>(config: &NoiseConfig, rng: R) -> Result<Box<dyn Noise>, GeneratorError>
where
    R: Rng + Send + 'static,
{
    match config {
        NoiseConfig::Gaussian { mean, std } => Ok(Box::new(GaussianNoise::new(*mean, *std, rng)?)),
        NoiseConfig::Red {
            mean,
            std,
            tau,
            start_value,
        } => Ok(Box::new(RedNoise::new(
            *mean,
            *std,
            *tau,
            *start_value,
            rng,
        )?)),
    }
}
