//! Signal generators — the deterministic or stochastic backbone of a series.
//!
//! Closed-form signals (`Sinusoidal`, `PseudoPeriodic`) are vectorizable.
//! Lag-based signals (`AutoRegressive`, `Car`) depend on their own previous
//! output and can only be sampled one step at a time.

pub mod autoregressive;
pub mod car;
pub mod pseudo_periodic;
pub mod sinusoidal;

pub use autoregressive::AutoRegressive;
pub use car::Car;
pub use pseudo_periodic::PseudoPeriodic;
pub use sinusoidal::{Sinusoidal, Waveform};
