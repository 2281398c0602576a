//! Noise generators — additive perturbations layered on top of a signal.

pub mod gaussian;
pub mod red;

pub use gaussian::GaussianNoise;
pub use red::RedNoise;
