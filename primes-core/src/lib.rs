#![no_std]

//! Primes Core - prime factorization and sieve definitions
//!
//! This crate provides the value types, capability traits, validation
//! helpers and (with the `alloc` feature) the progress-driven algorithms
//! behind the `primes` calculators. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod algorithms;
pub mod error;
pub mod factor;
pub mod traits;
pub mod validation;
pub mod version;

#[cfg(feature = "alloc")]
pub use algorithms::{factorize, sieve, sieve_bound, DEFAULT_PROGRESS_STEPS};
pub use error::*;
pub use factor::{product, PrimeFactor};
pub use traits::*;
pub use validation::{fill_buffer, parse_version};
pub use version::{LibraryVersion, LIBRARY_VERSION};
