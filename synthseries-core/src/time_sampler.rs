//! Time sampler — regular and irregular timestamp sequences over `[start, stop]`.
//!
//! Regular mode:
//! - `resolution = r` → `start, start + r, …` strictly below `stop`.
//! - `num_points = n` → `n` evenly spaced points from `start` to `stop` inclusive.
//! - Resolution wins when both are given.
//!
//! Irregular mode builds the same grid, keeps `floor(keep_percentage * len / 100)`
//! randomly chosen grid positions, jitters each by `N(0, resolution)` and sorts
//! the result. With only `num_points`, the jitter scale is `(stop - start) / num_points`.

use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::rng::SeriesRng;

/// Errors from time sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeSamplerError {
    #[error("one of num_points or resolution must be given")]
    MissingSpacing,
    #[error("unknown sampling mode '{0}' (expected 'regular' or 'irregular')")]
    UnknownMode(String),
    #[error("resolution must be finite and > 0, got {0}")]
    InvalidResolution(f64),
    #[error("keep_percentage must be within 0..=100, got {0}")]
    InvalidKeepPercentage(u32),
    #[error("interval must be finite with start <= stop, got [{start}, {stop}]")]
    InvalidInterval { start: f64, stop: f64 },
}

/// How timestamps are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    #[default]
    Regular,
    Irregular,
}

impl FromStr for SamplingMode {
    type Err = TimeSamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "irregular" => Ok(Self::Irregular),
            other => Err(TimeSamplerError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Irregular => write!(f, "irregular"),
        }
    }
}

/// Produces timestamp sequences over a fixed interval.
///
/// Owns its randomness source; only irregular sampling draws from it.
#[derive(Debug, Clone)]
pub struct TimeSampler<R = SeriesRng> {
    start: f64,
    stop: f64,
    rng: R,
}

impl TimeSampler<SeriesRng> {
    /// Convenience constructor with a seeded default RNG.
    pub fn seeded(start: f64, stop: f64, seed: u64) -> Result<Self, TimeSamplerError> {
        use rand::SeedableRng;
        Self::new(start, stop, SeriesRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TimeSampler<R> {
    pub fn new(start: f64, stop: f64, rng: R) -> Result<Self, TimeSamplerError> {
        if !start.is_finite() || !stop.is_finite() || start > stop {
            return Err(TimeSamplerError::InvalidInterval { start, stop });
        }
        Ok(Self { start, stop, rng })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Sample timestamps in the given mode.
    pub fn sample_time(
        &mut self,
        num_points: Option<usize>,
        resolution: Option<f64>,
        keep_percentage: u32,
        how: SamplingMode,
    ) -> Result<Vec<f64>, TimeSamplerError> {
        if keep_percentage > 100 {
            return Err(TimeSamplerError::InvalidKeepPercentage(keep_percentage));
        }
        match how {
            SamplingMode::Regular => self.regular(num_points, resolution),
            SamplingMode::Irregular => self.irregular(num_points, resolution, keep_percentage),
        }
    }

    /// Like `sample_time`, with the mode given by name.
    pub fn sample_time_named(
        &mut self,
        num_points: Option<usize>,
        resolution: Option<f64>,
        keep_percentage: u32,
        how: &str,
    ) -> Result<Vec<f64>, TimeSamplerError> {
        let mode = how.parse()?;
        self.sample_time(num_points, resolution, keep_percentage, mode)
    }

    /// Evenly spaced timestamps. Draws no randomness.
    pub fn regular(
        &self,
        num_points: Option<usize>,
        resolution: Option<f64>,
    ) -> Result<Vec<f64>, TimeSamplerError> {
        let times = match (num_points, resolution) {
            (_, Some(r)) => arange(self.start, self.stop, check_resolution(r)?),
            (Some(n), None) => linspace(self.start, self.stop, n),
            (None, None) => return Err(TimeSamplerError::MissingSpacing),
        };
        debug!(points = times.len(), "regular grid");
        Ok(times)
    }

    /// Randomly subsampled, jittered and sorted timestamps.
    pub fn irregular(
        &mut self,
        num_points: Option<usize>,
        resolution: Option<f64>,
        keep_percentage: u32,
    ) -> Result<Vec<f64>, TimeSamplerError> {
        if keep_percentage > 100 {
            return Err(TimeSamplerError::InvalidKeepPercentage(keep_percentage));
        }
        let (grid, spacing) = match (num_points, resolution) {
            (_, Some(r)) => {
                let r = check_resolution(r)?;
                (arange(self.start, self.stop, r), r)
            }
            (Some(n), None) => {
                let spacing = if n == 0 {
                    0.0
                } else {
                    (self.stop - self.start) / n as f64
                };
                (linspace(self.start, self.stop, n), spacing)
            }
            (None, None) => return Err(TimeSamplerError::MissingSpacing),
        };

        let keep = keep_percentage as usize * grid.len() / 100;
        let jitter = Normal::new(0.0, spacing)
            .map_err(|_| TimeSamplerError::InvalidResolution(spacing))?;

        let mut times: Vec<f64> = index::sample(&mut self.rng, grid.len(), keep)
            .into_iter()
            .map(|i| grid[i] + jitter.sample(&mut self.rng))
            .collect();
        times.sort_by(f64::total_cmp);

        debug!(grid = grid.len(), kept = times.len(), spacing, "irregular grid");
        Ok(times)
    }
}

fn check_resolution(r: f64) -> Result<f64, TimeSamplerError> {
    if r.is_finite() && r > 0.0 {
        Ok(r)
    } else {
        Err(TimeSamplerError::InvalidResolution(r))
    }
}

/// `start, start + step, …` strictly below `stop`.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let span = stop - start;
    if span <= 0.0 {
        return Vec::new();
    }
    let n = (span / step).ceil() as usize;
    (0..n)
        .map(|k| start + k as f64 * step)
        .take_while(|&t| t < stop)
        .collect()
}

/// `n` evenly spaced points covering `[start, stop]`, endpoints exact.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}
