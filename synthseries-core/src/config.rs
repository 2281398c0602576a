//! Serializable series configuration.
//!
//! One TOML document captures everything needed to reproduce a series: the
//! master seed, the time grid, the signal and the optional noise source.
//!
//! ```toml
//! seed = 7
//!
//! [time]
//! start = 0.0
//! stop = 10.0
//! num_points = 200
//! how = "irregular"
//! keep_percentage = 60
//!
//! [signal]
//! type = "auto_regressive"
//! ar_param = [0.6, -0.2]
//! sigma = 0.5
//!
//! [noise]
//! type = "gaussian"
//! std = 0.1
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::factory::{create_noise, create_signal};
use crate::generator::GeneratorError;
use crate::rng::{SeedHierarchy, SeriesRng, NOISE_STREAM, SIGNAL_STREAM, TIME_STREAM};
use crate::series::{SampledSeries, SyntheticSeries};
use crate::signals::Waveform;
use crate::time_sampler::{SamplingMode, TimeSampler, TimeSamplerError};

/// Errors from loading or building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Time(#[from] TimeSamplerError),
}

// ─── Defaults ────────────────────────────────────────────────────────

fn default_seed() -> u64 {
    42
}

fn default_stop() -> f64 {
    10.0
}

fn default_keep_percentage() -> u32 {
    100
}

fn one() -> f64 {
    1.0
}

fn half() -> f64 {
    0.5
}

fn default_pseudo_frequency() -> f64 {
    100.0
}

fn default_amplitude_sd() -> f64 {
    0.1
}

fn default_frequency_sd() -> f64 {
    0.4
}

fn default_car_start() -> f64 {
    0.01
}

fn default_tau() -> f64 {
    0.2
}

// ─── Components ──────────────────────────────────────────────────────

/// Time grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeConfig {
    #[serde(default)]
    pub start: f64,
    #[serde(default = "default_stop")]
    pub stop: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_points: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
    #[serde(default = "default_keep_percentage")]
    pub keep_percentage: u32,
    #[serde(default)]
    pub how: SamplingMode,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: default_stop(),
            num_points: None,
            resolution: None,
            keep_percentage: default_keep_percentage(),
            how: SamplingMode::Regular,
        }
    }
}

/// Signal generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalConfig {
    /// `amplitude * h(2π * frequency * t)`.
    Sinusoidal {
        #[serde(default = "one")]
        amplitude: f64,
        #[serde(default = "one")]
        frequency: f64,
        #[serde(default)]
        waveform: Waveform,
    },
    /// Sine with per-sample jitter on amplitude and angular frequency.
    PseudoPeriodic {
        #[serde(default = "one")]
        amplitude: f64,
        #[serde(default = "default_pseudo_frequency")]
        frequency: f64,
        #[serde(default = "default_amplitude_sd")]
        amplitude_sd: f64,
        #[serde(default = "default_frequency_sd")]
        frequency_sd: f64,
        #[serde(default)]
        waveform: Waveform,
    },
    /// AR(p) with lag coefficients `[φ1, …, φp]`.
    AutoRegressive {
        ar_param: Vec<f64>,
        #[serde(default = "half")]
        sigma: f64,
        /// Oldest first; zeros when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_value: Option<Vec<f64>>,
    },
    /// Continuous AR(1) for irregular time.
    Car {
        #[serde(default = "one")]
        ar_param: f64,
        #[serde(default = "half")]
        sigma: f64,
        #[serde(default = "default_car_start")]
        start_value: f64,
    },
}

/// Noise generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoiseConfig {
    /// White noise `N(mean, std)`.
    Gaussian {
        #[serde(default)]
        mean: f64,
        #[serde(default = "one")]
        std: f64,
    },
    /// Correlated noise with correlation time `tau`.
    Red {
        #[serde(default)]
        mean: f64,
        #[serde(default = "one")]
        std: f64,
        #[serde(default = "default_tau")]
        tau: f64,
        #[serde(default)]
        start_value: f64,
    },
}

/// Complete, reproducible description of one synthetic series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub time: TimeConfig,
    pub signal: SignalConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseConfig>,
}

/// Timestamps plus the series sampled at them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedSeries {
    pub times: Vec<f64>,
    #[serde(flatten)]
    pub series: SampledSeries,
}

impl SeriesConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Construct the time sampler and the series.
    ///
    /// Each component draws from its own stream of the seed hierarchy, so
    /// adding or removing noise never changes the timestamps or the signal.
    pub fn build(&self) -> Result<(TimeSampler, SyntheticSeries), ConfigError> {
        let seeds = SeedHierarchy::new(self.seed);
        let sampler = TimeSampler::new(
            self.time.start,
            self.time.stop,
            seeds.rng_for(TIME_STREAM),
        )?;
        let signal = create_signal::<SeriesRng>(&self.signal, seeds.rng_for(SIGNAL_STREAM))?;
        let mut series = SyntheticSeries::new(signal);
        if let Some(noise) = &self.noise {
            series = series.with_noise(create_noise::<SeriesRng>(
                noise,
                seeds.rng_for(NOISE_STREAM),
            )?);
        }
        debug!(seed = self.seed, ?series, "built series from config");
        Ok((sampler, series))
    }

    /// Sample the time grid, then the series over it.
    pub fn generate(&self) -> Result<GeneratedSeries, ConfigError> {
        let (mut sampler, mut series) = self.build()?;
        let times = sampler.sample_time(
            self.time.num_points,
            self.time.resolution,
            self.time.keep_percentage,
            self.time.how,
        )?;
        let sampled = series.sample(&times)?;
        Ok(GeneratedSeries {
            times,
            series: sampled,
        })
    }
}
