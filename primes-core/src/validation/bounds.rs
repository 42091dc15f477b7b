//! Parameter bounds for calculator configuration
//!
//! Pure checks on numeric arguments with no I/O.

use crate::PrimesError;

/// Progress steps must be at least one
pub const fn validate_progress_steps(steps: u32) -> Result<u32, PrimesError> {
    if steps == 0 {
        return Err(PrimesError::InvalidParam);
    }
    Ok(steps)
}

/// An abort threshold is a completed fraction in `[0, 1]`
pub fn validate_abort_fraction(fraction: f32) -> Result<f32, PrimesError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(PrimesError::InvalidParam);
    }
    Ok(fraction)
}

/// Check a sieve bound against an optional limit
pub const fn validate_sieve_value(value: u64, limit: Option<u64>) -> Result<u64, PrimesError> {
    match limit {
        Some(max) if value > max => Err(PrimesError::ValueTooLarge),
        _ => Ok(value),
    }
}

/// Iterations between two progress reports when `bound` iterations are
/// split into `steps` reports
///
/// Never returns zero.
pub const fn progress_interval(bound: u64, steps: u32) -> u64 {
    let steps = if steps == 0 { 1 } else { steps as u64 };
    let interval = bound.div_ceil(steps);
    if interval == 0 {
        1
    } else {
        interval
    }
}
