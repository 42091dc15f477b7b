//! Progress reporting and cooperative cancellation

/// Decision returned by a [`ProgressObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep computing
    Continue,
    /// Abandon the computation
    Abort,
}

/// Receives progress reports from a running algorithm
///
/// Algorithms call [`report`](ProgressObserver::report) only at loop
/// iteration boundaries. Returning [`Progress::Abort`] makes the algorithm
/// stop before its next step and fail with
/// [`PrimesError::CalculationAborted`](crate::PrimesError::CalculationAborted).
pub trait ProgressObserver {
    /// Report the completed fraction, in `[0, 1]`
    fn report(&mut self, fraction: f32) -> Progress;
}

/// Observer that ignores every report and never aborts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn report(&mut self, _fraction: f32) -> Progress {
        Progress::Continue
    }
}
