//! Calculator configuration

use primes_core::validation::validate_progress_steps;
use primes_core::{Result, DEFAULT_PROGRESS_STEPS};

/// Configuration shared by all calculators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Number of progress reports spread across the sieve's striking phase
    pub progress_steps: u32,
    /// Largest sieve bound accepted before allocating the marker array.
    /// `None` accepts anything the allocator can satisfy.
    pub max_sieve_value: Option<u64>,
}

impl CalculatorConfig {
    /// Set the number of sieve progress reports
    pub fn with_progress_steps(mut self, steps: u32) -> Self {
        self.progress_steps = steps;
        self
    }

    /// Reject sieve bounds above `max`
    pub fn with_max_sieve_value(mut self, max: u64) -> Self {
        self.max_sieve_value = Some(max);
        self
    }

    /// Check that all settings are usable
    pub fn validate(&self) -> Result<()> {
        validate_progress_steps(self.progress_steps)?;
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            progress_steps: DEFAULT_PROGRESS_STEPS,
            max_sieve_value: None,
        }
    }
}
