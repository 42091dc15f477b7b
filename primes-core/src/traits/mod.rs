//! Abstract interfaces for prime calculators
//!
//! Capabilities are split into small traits instead of one deep hierarchy:
//! a calculator has a numeric value, accepts a progress callback, and
//! produces a result set. Traits are pure interfaces - no concrete
//! implementations beyond the trivial [`NoProgress`] observer.

pub mod calculator;
pub mod progress;

pub use calculator::{CalculationState, Calculator, HasValue, ProgressReporting};
pub use progress::{NoProgress, Progress, ProgressObserver};
