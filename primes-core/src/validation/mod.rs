//! Validation utilities for calculator inputs and outputs
//!
//! This module contains pure functions with no I/O dependencies.

pub mod bounds;
pub mod buffer;
pub mod parsing;

pub use bounds::{
    progress_interval, validate_abort_fraction, validate_progress_steps, validate_sieve_value,
};
pub use buffer::fill_buffer;
pub use parsing::parse_version;
