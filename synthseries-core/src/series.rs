//! Sampling engine — combines one signal and an optional noise source over a
//! timestamp sequence.
//!
//! The evaluation path is chosen once per call from the generators'
//! vectorization flags:
//!
//! 1. signal and noise both vectorizable → two batch calls, summed.
//! 2. signal vectorizable, no noise → one batch call, zero noise.
//! 3. anything else → sequential walk, noise first then signal at each index.
//!
//! In the sequential walk both generators see the combined samples and noise
//! values of every index strictly before the current one, never the current
//! index itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::generator::{Generator, GeneratorError, Noise, Signal};

/// Which evaluation strategy a sampling pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingPath {
    /// Signal and noise evaluated in one batch call each.
    Vectorized,
    /// Signal evaluated in one batch call, no noise source.
    SignalOnly,
    /// Index-by-index walk threading history through `sample_next`.
    Sequential,
}

impl SamplingPath {
    /// Pick the path from the signal's vectorization flag and, when a noise
    /// source is present, its flag.
    pub fn select(signal_vectorizable: bool, noise_vectorizable: Option<bool>) -> Self {
        match (signal_vectorizable, noise_vectorizable) {
            (true, Some(true)) => Self::Vectorized,
            (true, None) => Self::SignalOnly,
            _ => Self::Sequential,
        }
    }
}

/// One aligned record of a sampled series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleTriple {
    pub combined: f64,
    pub signal: f64,
    pub noise: f64,
}

/// Output of a sampling pass: three sequences aligned with the input times.
///
/// `combined[i] == signal[i] + noise[i]` for every index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledSeries {
    pub combined: Vec<f64>,
    pub signal: Vec<f64>,
    pub noise: Vec<f64>,
}

impl SampledSeries {
    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SampleTriple> {
        Some(SampleTriple {
            combined: *self.combined.get(index)?,
            signal: *self.signal.get(index)?,
            noise: *self.noise.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleTriple> + '_ {
        self.combined
            .iter()
            .zip(&self.signal)
            .zip(&self.noise)
            .map(|((&combined, &signal), &noise)| SampleTriple {
                combined,
                signal,
                noise,
            })
    }
}

/// Sample `signal` (plus `noise`, if any) at every timestamp in `times`.
///
/// Generator errors abort the pass and are returned unchanged.
pub fn sample(
    times: &[f64],
    signal: &mut (dyn Signal + '_),
    mut noise: Option<&mut (dyn Noise + '_)>,
) -> Result<SampledSeries, GeneratorError> {
    let path = SamplingPath::select(
        signal.is_vectorizable(),
        noise.as_deref().map(|n| n.is_vectorizable()),
    );
    debug!(
        ?path,
        points = times.len(),
        signal = signal.name(),
        noise = ?noise.as_deref().map(|n| n.name()),
        "sampling series"
    );

    match path {
        SamplingPath::Vectorized | SamplingPath::SignalOnly => {
            let signal_values = vectorized(signal, times)?;
            let noise_values = match noise.as_deref_mut() {
                Some(n) => vectorized(n, times)?,
                None => vec![0.0; times.len()],
            };
            let combined = signal_values
                .iter()
                .zip(&noise_values)
                .map(|(s, e)| s + e)
                .collect();
            Ok(SampledSeries {
                combined,
                signal: signal_values,
                noise: noise_values,
            })
        }
        SamplingPath::Sequential => sequential(times, signal, noise),
    }
}

/// Batch call with an output-length check.
fn vectorized<G: Generator + ?Sized>(
    generator: &mut G,
    times: &[f64],
) -> Result<Vec<f64>, GeneratorError> {
    let values = generator.sample_vectorized(times)?;
    if values.len() != times.len() {
        return Err(GeneratorError::OutputLength {
            generator: generator.name().to_string(),
            expected: times.len(),
            actual: values.len(),
        });
    }
    Ok(values)
}

fn sequential(
    times: &[f64],
    signal: &mut (dyn Signal + '_),
    mut noise: Option<&mut (dyn Noise + '_)>,
) -> Result<SampledSeries, GeneratorError> {
    let n = times.len();
    let mut out = SampledSeries {
        combined: Vec::with_capacity(n),
        signal: Vec::with_capacity(n),
        noise: Vec::with_capacity(n),
    };

    for (i, &t) in times.iter().enumerate() {
        // out.* hold exactly indices 0..i at this point
        let error = match noise.as_deref_mut() {
            Some(source) => source.sample_next(t, &out.combined, &out.noise)?,
            None => 0.0,
        };
        let value = signal.sample_next(t, &out.combined, &out.noise)?;
        trace!(index = i, time = t, signal = value, noise = error, "sequential step");

        out.combined.push(value + error);
        out.signal.push(value);
        out.noise.push(error);
    }

    Ok(out)
}

/// A signal source paired with an optional noise source.
///
/// Owns its generators; one `sample` call is one pass. Call `reset` before
/// sampling again if the generators are stateful.
pub struct SyntheticSeries {
    signal: Box<dyn Signal>,
    noise: Option<Box<dyn Noise>>,
}

impl SyntheticSeries {
    pub fn new(signal: Box<dyn Signal>) -> Self {
        Self {
            signal,
            noise: None,
        }
    }

    pub fn with_noise(mut self, noise: Box<dyn Noise>) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn signal(&self) -> &dyn Signal {
        self.signal.as_ref()
    }

    pub fn noise(&self) -> Option<&dyn Noise> {
        self.noise.as_deref()
    }

    /// The path the next `sample` call will take.
    pub fn path(&self) -> SamplingPath {
        SamplingPath::select(
            self.signal.is_vectorizable(),
            self.noise.as_ref().map(|n| n.is_vectorizable()),
        )
    }

    pub fn sample(&mut self, times: &[f64]) -> Result<SampledSeries, GeneratorError> {
        sample(times, self.signal.as_mut(), self.noise.as_deref_mut())
    }

    /// Return both generators to their freshly-constructed state.
    pub fn reset(&mut self) {
        self.signal.reset();
        if let Some(noise) = self.noise.as_mut() {
            noise.reset();
        }
    }
}

impl std::fmt::Debug for SyntheticSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticSeries")
            .field("signal", &self.signal.name())
            .field("noise", &self.noise.as_ref().map(|n| n.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::GaussianNoise;
    use crate::rng::SeriesRng;
    use crate::signals::Sinusoidal;
    use rand::SeedableRng;

    /// Sequential generator that records the history lengths it was shown.
    struct HistoryRecorder {
        seen: Vec<(usize, usize)>,
        value: f64,
    }

    impl Generator for HistoryRecorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn is_vectorizable(&self) -> bool {
            false
        }

        fn sample_next(
            &mut self,
            _time: f64,
            samples: &[f64],
            errors: &[f64],
        ) -> Result<f64, GeneratorError> {
            self.seen.push((samples.len(), errors.len()));
            Ok(self.value)
        }
    }

    impl Signal for HistoryRecorder {}
    impl Noise for HistoryRecorder {}

    fn recorder(value: f64) -> HistoryRecorder {
        HistoryRecorder {
            seen: Vec::new(),
            value,
        }
    }

    #[test]
    fn path_selection_covers_all_cases() {
        use SamplingPath::*;
        assert_eq!(SamplingPath::select(true, Some(true)), Vectorized);
        assert_eq!(SamplingPath::select(true, None), SignalOnly);
        assert_eq!(SamplingPath::select(true, Some(false)), Sequential);
        assert_eq!(SamplingPath::select(false, None), Sequential);
        assert_eq!(SamplingPath::select(false, Some(true)), Sequential);
    }

    #[test]
    fn history_excludes_current_index() {
        let mut signal = recorder(1.0);
        let mut noise = recorder(0.5);
        let times = [0.0, 1.0, 2.0, 3.0];

        let out = sample(&times, &mut signal, Some(&mut noise)).unwrap();

        let expected: Vec<(usize, usize)> = (0..4).map(|i| (i, i)).collect();
        assert_eq!(signal.seen, expected);
        assert_eq!(noise.seen, expected);
        assert_eq!(out.combined, vec![1.5; 4]);
    }

    #[test]
    fn no_noise_means_zero_noise_component() {
        let mut signal = recorder(2.0);
        let out = sample(&[0.0, 1.0, 2.0], &mut signal, None).unwrap();
        assert_eq!(out.noise, vec![0.0; 3]);
        assert_eq!(out.combined, out.signal);
    }

    #[test]
    fn batch_paths_fill_noise_only_when_present() {
        let times = [0.0, 0.25, 0.5];
        let mut sine = Sinusoidal::default();
        let alone = sample(&times, &mut sine, None).unwrap();
        assert_eq!(alone.noise, vec![0.0; 3]);
        assert_eq!(alone.combined, alone.signal);

        let mut offset = GaussianNoise::new(1.0, 0.0, SeriesRng::seed_from_u64(0)).unwrap();
        let with = sample(&times, &mut sine, Some(&mut offset)).unwrap();
        assert_eq!(with.signal, alone.signal);
        assert_eq!(with.noise, vec![1.0; 3]);
        for (c, s) in with.combined.iter().zip(&with.signal) {
            assert_eq!(*c, s + 1.0);
        }
    }

    #[test]
    fn empty_timestamps_give_empty_series() {
        let mut sine = Sinusoidal::default();
        let out = sample(&[], &mut sine, None).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.get(0), None);
    }

    #[test]
    fn iter_yields_aligned_triples() {
        let series = SampledSeries {
            combined: vec![3.0, 5.0],
            signal: vec![1.0, 2.0],
            noise: vec![2.0, 3.0],
        };
        let triples: Vec<_> = series.iter().collect();
        assert_eq!(triples.len(), 2);
        assert_eq!(
            triples[1],
            SampleTriple {
                combined: 5.0,
                signal: 2.0,
                noise: 3.0
            }
        );
    }

    #[test]
    fn short_batch_output_is_rejected() {
        struct Short;
        impl Generator for Short {
            fn name(&self) -> &str {
                "short"
            }
            fn is_vectorizable(&self) -> bool {
                true
            }
            fn sample_next(&mut self, _: f64, _: &[f64], _: &[f64]) -> Result<f64, GeneratorError> {
                Ok(0.0)
            }
            fn sample_vectorized(&mut self, _: &[f64]) -> Result<Vec<f64>, GeneratorError> {
                Ok(vec![0.0])
            }
        }
        impl Signal for Short {}

        let err = sample(&[0.0, 1.0], &mut Short, None).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::OutputLength {
                generator: "short".into(),
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn owned_series_reports_its_path() {
        let series = SyntheticSeries::new(Box::new(Sinusoidal::default())).with_noise(Box::new(
            GaussianNoise::new(0.0, 1.0, SeriesRng::seed_from_u64(0)).unwrap(),
        ));
        assert_eq!(series.path(), SamplingPath::Vectorized);
        assert_eq!(series.noise().map(|n| n.name()), Some("gaussian"));
    }
}
