//! Calculator capability traits
//!
//! This module defines the contracts shared by every calculator. These are
//! pure interfaces with no concrete implementations.

use crate::validation::fill_buffer;
use crate::Result;

/// Lifecycle of a calculation
///
/// `Uninitialized -> ValueSet -> Computing -> {Done, Aborted}`. Results can
/// only be read from `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalculationState {
    /// No value has been set yet
    #[default]
    Uninitialized,
    /// A value is set but no result is held
    ValueSet,
    /// `calculate` is running
    Computing,
    /// The last calculation completed and its result is available
    Done,
    /// The last calculation was aborted by the progress callback
    Aborted,
}

impl core::fmt::Display for CalculationState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalculationState::Uninitialized => write!(f, "uninitialized"),
            CalculationState::ValueSet => write!(f, "value set"),
            CalculationState::Computing => write!(f, "computing"),
            CalculationState::Done => write!(f, "done"),
            CalculationState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Something that carries the numeric input of a calculation
pub trait HasValue {
    /// The current input value, `None` before the first `set_value`
    fn value(&self) -> Option<u64>;

    /// Set the input value and discard any previous result
    ///
    /// Fails with `CalculationInProgress` while the state is `Computing`.
    fn set_value(&mut self, value: u64) -> Result<()>;
}

/// Something that accepts a progress callback
///
/// The callback receives the completed fraction and a flag it may set to
/// `true` to abort the calculation.
pub trait ProgressReporting {
    /// Register a callback, replacing any previous one
    fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: FnMut(f32, &mut bool) + Send + 'static;

    /// Remove the registered callback
    fn clear_progress_callback(&mut self);

    /// Whether a callback is registered
    fn has_progress_callback(&self) -> bool;
}

/// A cancellable calculation with a queryable result buffer
pub trait Calculator: HasValue + ProgressReporting {
    /// Element type of the result set
    type Item: Copy;

    /// Run the calculation to completion or abort
    fn calculate(&mut self) -> Result<()>;

    /// Current lifecycle state
    fn state(&self) -> CalculationState;

    /// Borrow the result set
    ///
    /// Fails with `NoResultAvailable` unless the state is `Done`.
    fn results(&self) -> Result<&[Self::Item]>;

    /// Two-phase size-query/fill access to the result set
    ///
    /// Returns the number of elements needed. The buffer is written only if
    /// it is large enough to hold all of them; an empty buffer is a pure
    /// size query.
    fn fill_results(&self, buffer: &mut [Self::Item]) -> Result<u64> {
        Ok(fill_buffer(self.results()?, buffer))
    }
}
