//! Sieve of Eratosthenes calculator

use primes_core::validation::validate_sieve_value;
use primes_core::{sieve, CalculationState, Calculator, HasValue, ProgressReporting, Result};

use crate::calculator::{CalculatorBase, HasErrorLog};
use crate::config::CalculatorConfig;

/// Lists all primes up to a bound
///
/// Memory use is one byte per integer up to the bound. Set
/// [`CalculatorConfig::max_sieve_value`] to refuse bounds before anything
/// is allocated.
#[derive(Debug)]
pub struct SieveCalculator {
    base: CalculatorBase<u64>,
}

impl SieveCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self {
            base: CalculatorBase::new("sieve", CalculatorConfig::default()),
        }
    }

    /// Create a calculator with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base: CalculatorBase::new("sieve", config),
        })
    }

    /// Two-phase access to the primes
    ///
    /// Returns the number of primes. `buffer` is filled in ascending order
    /// only when it can hold all of them; pass an empty slice to query the
    /// size. Fails with `NoResultAvailable` unless the last calculation
    /// completed.
    pub fn get_primes(&self, buffer: &mut [u64]) -> Result<u64> {
        self.fill_results(buffer)
    }

    /// Borrow the primes of the last completed calculation
    pub fn primes(&self) -> Result<&[u64]> {
        self.base.results()
    }

    /// Query the size, then fill a vector of exactly that size
    pub fn collect_primes(&self) -> Result<Vec<u64>> {
        let needed = self.get_primes(&mut [])?;
        let mut primes = vec![0; needed as usize];
        self.get_primes(&mut primes)?;
        Ok(primes)
    }

    /// Forget value and result; keeps the callback and configuration
    pub fn reset(&mut self) {
        self.base.reset();
    }

    /// The active configuration
    pub fn config(&self) -> &CalculatorConfig {
        self.base.config()
    }
}

impl Default for SieveCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HasValue for SieveCalculator {
    fn value(&self) -> Option<u64> {
        self.base.value()
    }

    fn set_value(&mut self, value: u64) -> Result<()> {
        self.base.set_value(value)
    }
}

impl ProgressReporting for SieveCalculator {
    fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: FnMut(f32, &mut bool) + Send + 'static,
    {
        self.base.set_callback(Box::new(callback));
    }

    fn clear_progress_callback(&mut self) {
        self.base.clear_callback();
    }

    fn has_progress_callback(&self) -> bool {
        self.base.has_callback()
    }
}

impl Calculator for SieveCalculator {
    type Item = u64;

    fn calculate(&mut self) -> Result<()> {
        self.base.run(|value, config, observer| {
            validate_sieve_value(value, config.max_sieve_value)?;
            sieve(value, config.progress_steps, observer)
        })
    }

    fn state(&self) -> CalculationState {
        self.base.state()
    }

    fn results(&self) -> Result<&[u64]> {
        self.base.results()
    }
}

impl HasErrorLog for SieveCalculator {
    fn last_error_message(&self) -> Option<String> {
        self.base.errors().last()
    }

    fn clear_error_messages(&mut self) {
        self.base.errors_mut().clear();
    }
}
