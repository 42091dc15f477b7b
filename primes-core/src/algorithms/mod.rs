//! Prime algorithms driven by a progress observer
//!
//! Both algorithms are synchronous and run on the caller's thread. They
//! consult the observer only at loop iteration boundaries and discard all
//! partial output when it asks to abort.

pub mod factorization;
pub mod sieve;

pub use factorization::factorize;
pub use sieve::{sieve, sieve_bound, DEFAULT_PROGRESS_STEPS};
