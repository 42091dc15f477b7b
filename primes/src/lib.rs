//! Primes - cancellable prime factorization and sieve calculators
//!
//! This library computes the prime factors of a 64-bit value and all primes
//! up to a bound. Each calculation runs synchronously on the caller's
//! thread, reports progress to an optional callback, and can be aborted
//! from that callback.
//!
//! ## Architecture
//!
//! - **primes-core**: value types, capability traits, validation and the
//!   progress-driven algorithms (no I/O, `no_std`)
//! - **primes**: stateful calculators with lifecycle tracking, error logs,
//!   configuration, logging and a command-line front end
//!
//! ## Quick Start
//!
//! ```rust
//! use primes::{Calculator, HasValue, PrimesError, ProgressReporting, SieveCalculator};
//!
//! let mut sieve = SieveCalculator::new();
//! sieve.set_value(100)?;
//!
//! // Abort once more than half of the striking phase is done
//! sieve.set_progress_callback(|progress, abort| *abort = progress > 0.5);
//! assert_eq!(sieve.calculate(), Err(PrimesError::CalculationAborted));
//! assert_eq!(sieve.get_primes(&mut []), Err(PrimesError::NoResultAvailable));
//!
//! sieve.clear_progress_callback();
//! sieve.calculate()?;
//! assert_eq!(sieve.get_primes(&mut []), Ok(25));
//! # Ok::<(), PrimesError>(())
//! ```
//!
//! ## Features
//!
//! - **Two-phase buffers**: query the result size with an empty slice, then
//!   fill a slice of that size
//! - **Cooperative cancellation**: the callback's abort flag is checked at
//!   every loop boundary and never leaks partial results
//! - **serde**: `Serialize`/`Deserialize` for result and state types
//! - **cli**: the `primes` binary

// Re-export core abstractions
pub use primes_core::{
    // Value types
    product, PrimeFactor,
    // Capability traits
    CalculationState, Calculator, HasValue, ProgressReporting,
    // Error handling
    ErrorCategory, PrimesError, Result,
    // Versioning
    LibraryVersion, LIBRARY_VERSION,
};
pub use primes_core::validation;

// Implementation modules
pub mod calculator;
pub mod config;
pub mod factorization;
pub mod library;
pub mod logging;
pub mod sieve;

// Public exports
pub use calculator::{ErrorLog, HasErrorLog, ProgressCallback};
pub use config::CalculatorConfig;
pub use factorization::FactorizationCalculator;
pub use library::{
    create_factorization_calculator, create_sieve_calculator, last_error, library_version,
    require_version,
};
pub use sieve::SieveCalculator;
