//! SynthSeries Core — synthetic scalar time series from pluggable generators.
//!
//! This crate contains:
//! - The generator capability contract (signal and noise roles)
//! - Reference signals (sinusoidal, pseudo-periodic, AR(p), continuous AR)
//! - Reference noise (Gaussian white, red)
//! - The sampling engine with vectorized and sequential paths
//! - Regular and irregular time sampling
//! - TOML configuration, factory, and a BLAKE3 seed hierarchy

pub mod config;
pub mod factory;
pub mod generator;
pub mod noise;
pub mod rng;
pub mod series;
pub mod signals;
pub mod time_sampler;

pub use config::{ConfigError, GeneratedSeries, NoiseConfig, SeriesConfig, SignalConfig, TimeConfig};
pub use generator::{Generator, GeneratorError, Noise, Signal};
pub use rng::{SeedHierarchy, SeriesRng};
pub use series::{sample, SampleTriple, SampledSeries, SamplingPath, SyntheticSeries};
pub use time_sampler::{SamplingMode, TimeSampler, TimeSamplerError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: generators and engine types can move across threads.
    #[allow(dead_code)]
    fn assert_send() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<SyntheticSeries>();
        require_send::<TimeSampler>();
        require_send::<signals::Sinusoidal>();
        require_send::<signals::PseudoPeriodic>();
        require_send::<signals::AutoRegressive>();
        require_send::<signals::Car>();
        require_send::<noise::GaussianNoise>();
        require_send::<noise::RedNoise>();

        require_send::<SampledSeries>();
        require_sync::<SampledSeries>();
        require_send::<SeriesConfig>();
        require_sync::<SeriesConfig>();
        require_sync::<SeedHierarchy>();
    }

    /// Architecture contract: signal and noise trait objects share the
    /// generator surface, so the engine can drive either role identically.
    #[test]
    fn roles_share_the_generator_surface() {
        fn _drive(
            signal: &mut dyn Signal,
            noise: &mut dyn Noise,
        ) -> Result<(f64, f64), GeneratorError> {
            Ok((
                signal.sample_next(0.0, &[], &[])?,
                noise.sample_next(0.0, &[], &[])?,
            ))
        }
    }
}
