//! Shared calculator state and lifecycle
//!
//! Both calculators wrap a [`CalculatorBase`] which owns the input value,
//! the progress callback, the lifecycle state, the result set and the
//! per-instance error log. The base drives the state machine around an
//! algorithm from `primes-core`; the concrete calculators only choose the
//! algorithm and the result element type.

use std::cell::RefCell;
use std::fmt;

use primes_core::{CalculationState, PrimesError, Progress, ProgressObserver, Result};
use tracing::{debug, trace, warn};

use crate::config::CalculatorConfig;

/// Boxed progress callback: receives the completed fraction and an abort flag
pub type ProgressCallback = Box<dyn FnMut(f32, &mut bool) + Send>;

/// Access to the messages of failed operations on an instance
pub trait HasErrorLog {
    /// Message of the most recent failure, if any
    fn last_error_message(&self) -> Option<String>;

    /// Forget all recorded failures
    fn clear_error_messages(&mut self);
}

/// Messages of failed operations, oldest first
///
/// Uses interior mutability so that failing `&self` queries can record
/// themselves.
#[derive(Debug, Default)]
pub struct ErrorLog {
    messages: RefCell<Vec<String>>,
}

impl ErrorLog {
    /// Record `error` and hand it back for propagation
    pub fn register(&self, error: PrimesError) -> PrimesError {
        self.messages.borrow_mut().push(error.to_string());
        error
    }

    /// Most recent message
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all messages
    pub fn clear(&mut self) {
        self.messages.get_mut().clear();
    }
}

/// Adapts an optional user callback to the core [`ProgressObserver`]
pub(crate) struct CallbackObserver<'a> {
    callback: Option<&'a mut ProgressCallback>,
}

impl ProgressObserver for CallbackObserver<'_> {
    fn report(&mut self, fraction: f32) -> Progress {
        let Some(callback) = self.callback.as_deref_mut() else {
            return Progress::Continue;
        };

        let mut abort = false;
        callback(fraction, &mut abort);
        trace!(fraction, abort, "progress");

        if abort {
            Progress::Abort
        } else {
            Progress::Continue
        }
    }
}

/// State machine and storage shared by the calculators
pub(crate) struct CalculatorBase<T> {
    kind: &'static str,
    value: Option<u64>,
    callback: Option<ProgressCallback>,
    state: CalculationState,
    result: Option<Vec<T>>,
    config: CalculatorConfig,
    errors: ErrorLog,
}

impl<T> CalculatorBase<T> {
    pub(crate) fn new(kind: &'static str, config: CalculatorConfig) -> Self {
        Self {
            kind,
            value: None,
            callback: None,
            state: CalculationState::Uninitialized,
            result: None,
            config,
            errors: ErrorLog::default(),
        }
    }

    pub(crate) fn value(&self) -> Option<u64> {
        self.value
    }

    pub(crate) fn state(&self) -> CalculationState {
        self.state
    }

    pub(crate) fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub(crate) fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub(crate) fn errors_mut(&mut self) -> &mut ErrorLog {
        &mut self.errors
    }

    /// Set the input and drop the previous result
    ///
    /// A calculator left in `Computing` (a callback panicked mid-run) refuses
    /// new values until [`reset`](Self::reset).
    pub(crate) fn set_value(&mut self, value: u64) -> Result<()> {
        if self.state == CalculationState::Computing {
            return Err(self.errors.register(PrimesError::CalculationInProgress));
        }

        self.value = Some(value);
        self.result = None;
        self.state = CalculationState::ValueSet;
        debug!(kind = self.kind, value, "value set");
        Ok(())
    }

    /// Return to `Uninitialized`, keeping callback and configuration
    pub(crate) fn reset(&mut self) {
        self.value = None;
        self.result = None;
        self.state = CalculationState::Uninitialized;
    }

    pub(crate) fn set_callback(&mut self, callback: ProgressCallback) {
        self.callback = Some(callback);
    }

    pub(crate) fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub(crate) fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// The result set, available only in `Done`
    pub(crate) fn results(&self) -> Result<&[T]> {
        match (&self.result, self.state) {
            (Some(result), CalculationState::Done) => Ok(result),
            _ => Err(self.errors.register(PrimesError::NoResultAvailable)),
        }
    }

    /// Run `compute` on the current value and move to `Done` or `Aborted`
    ///
    /// The previous result is cleared before `compute` starts, so a failed
    /// run never exposes stale or partial results. Failures other than an
    /// abort leave the calculator in `ValueSet`.
    pub(crate) fn run<F>(&mut self, compute: F) -> Result<()>
    where
        F: FnOnce(u64, &CalculatorConfig, &mut CallbackObserver<'_>) -> Result<Vec<T>>,
    {
        if self.state == CalculationState::Computing {
            return Err(self.errors.register(PrimesError::CalculationInProgress));
        }
        let Some(value) = self.value else {
            return Err(self.errors.register(PrimesError::ValueNotSet));
        };

        self.result = None;
        self.state = CalculationState::Computing;
        debug!(kind = self.kind, value, "calculation started");

        let mut observer = CallbackObserver {
            callback: self.callback.as_mut(),
        };
        match compute(value, &self.config, &mut observer) {
            Ok(result) => {
                debug!(kind = self.kind, value, count = result.len(), "calculation finished");
                self.result = Some(result);
                self.state = CalculationState::Done;
                Ok(())
            }
            Err(PrimesError::CalculationAborted) => {
                warn!(kind = self.kind, value, "calculation aborted");
                self.state = CalculationState::Aborted;
                Err(self.errors.register(PrimesError::CalculationAborted))
            }
            Err(err) => {
                warn!(kind = self.kind, value, error = %err, "calculation failed");
                self.state = CalculationState::ValueSet;
                Err(self.errors.register(err))
            }
        }
    }
}

impl<T> fmt::Debug for CalculatorBase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorBase")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("state", &self.state)
            .field("has_callback", &self.callback.is_some())
            .field("result_len", &self.result.as_ref().map(Vec::len))
            .field("config", &self.config)
            .finish()
    }
}
