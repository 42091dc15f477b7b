//! Prime factorization calculator

use primes_core::{
    factorize, CalculationState, Calculator, HasValue, PrimeFactor, ProgressReporting, Result,
};

use crate::calculator::{CalculatorBase, HasErrorLog};
use crate::config::CalculatorConfig;

/// Factorizes a single value by trial division
///
/// ```
/// use primes::{Calculator, FactorizationCalculator, HasValue, PrimeFactor};
///
/// let mut calculator = FactorizationCalculator::new();
/// calculator.set_value(2601)?;
/// calculator.calculate()?;
///
/// // Size query, then fill
/// let needed = calculator.get_prime_factors(&mut [])?;
/// let mut factors = vec![PrimeFactor::default(); needed as usize];
/// calculator.get_prime_factors(&mut factors)?;
/// assert_eq!(factors, [PrimeFactor::new(3, 2), PrimeFactor::new(17, 2)]);
/// # Ok::<(), primes::PrimesError>(())
/// ```
#[derive(Debug)]
pub struct FactorizationCalculator {
    base: CalculatorBase<PrimeFactor>,
}

impl FactorizationCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self {
            base: CalculatorBase::new("factorization", CalculatorConfig::default()),
        }
    }

    /// Create a calculator with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base: CalculatorBase::new("factorization", config),
        })
    }

    /// Two-phase access to the prime factors
    ///
    /// Returns the number of factors. `buffer` is filled in ascending prime
    /// order only when it can hold all of them; pass an empty slice to query
    /// the size. Fails with `NoResultAvailable` unless the last calculation
    /// completed.
    pub fn get_prime_factors(&self, buffer: &mut [PrimeFactor]) -> Result<u64> {
        self.fill_results(buffer)
    }

    /// Borrow the prime factors of the last completed calculation
    pub fn prime_factors(&self) -> Result<&[PrimeFactor]> {
        self.base.results()
    }

    /// Query the size, then fill a vector of exactly that size
    pub fn collect_prime_factors(&self) -> Result<Vec<PrimeFactor>> {
        let needed = self.get_prime_factors(&mut [])?;
        let mut factors = vec![PrimeFactor::default(); needed as usize];
        self.get_prime_factors(&mut factors)?;
        Ok(factors)
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

impl Default for FactorizationCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HasValue for FactorizationCalculator {
    fn value(&self) -> Option<u64> {
        self.base.value()
    }

    fn set_value(&mut self, value: u64) -> Result<()> {
        self.base.set_value(value)
    }
}

impl ProgressReporting for FactorizationCalculator {
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

impl Calculator for FactorizationCalculator {
    type Item = PrimeFactor;

    fn calculate(&mut self) -> Result<()> {
        self.base
            .run(|value, _config, observer| factorize(value, observer))
    }

    fn state(&self) -> CalculationState {
        self.base.state()
    }

    fn results(&self) -> Result<&[PrimeFactor]> {
        self.base.results()
    }
}

impl HasErrorLog for FactorizationCalculator {
    fn last_error_message(&self) -> Option<String> {
        self.base.errors().last()
    }

    fn clear_error_messages(&mut self) {
        self.base.errors_mut().clear();
    }
}
