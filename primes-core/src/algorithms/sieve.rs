//! Sieve of Eratosthenes

use alloc::vec::Vec;

use crate::validation::progress_interval;
use crate::{PrimesError, Progress, ProgressObserver, Result};

/// Default number of progress reports across the striking phase
pub const DEFAULT_PROGRESS_STEPS: u32 = 20;

/// Upper bound of the striking phase: `sqrt(value)` computed in `f64` and
/// truncated toward zero
pub fn sieve_bound(value: u64) -> u64 {
    (value as f64).sqrt() as u64
}

/// Collect all primes `<= value` in ascending order
///
/// Keeps one struck-out marker per integer in `0..=value`, so memory use is
/// O(value). Allocation is fallible: a bound that cannot be represented or
/// reserved fails with [`PrimesError::InsufficientMemory`].
///
/// For `i` in `2..=sieve_bound(value)` every unstruck `i` is recorded and its
/// multiples from `i * i` up to `value` are struck out; the remaining
/// unstruck indices above the bound are primes as well. Every
/// `ceil(bound / progress_steps)` iterations of the striking phase the
/// observer receives `i / bound`; an abort request discards the partial
/// list and fails with [`PrimesError::CalculationAborted`].
pub fn sieve<O>(value: u64, progress_steps: u32, observer: &mut O) -> Result<Vec<u64>>
where
    O: ProgressObserver + ?Sized,
{
    let len = usize::try_from(value)
        .ok()
        .and_then(|v| v.checked_add(1))
        .ok_or(PrimesError::InsufficientMemory)?;

    let mut struck_out: Vec<bool> = Vec::new();
    struck_out
        .try_reserve_exact(len)
        .map_err(|_| PrimesError::InsufficientMemory)?;
    struck_out.extend((0..len).map(|i| i < 2));

    let bound = sieve_bound(value);
    let interval = progress_interval(bound, progress_steps);
    let mut primes = Vec::new();

    for i in 2..=bound {
        if i % interval == 0 && observer.report(i as f32 / bound as f32) == Progress::Abort {
            return Err(PrimesError::CalculationAborted);
        }

        if struck_out[i as usize] {
            continue;
        }
        primes.push(i);

        // i * i > value once i passes the true square root
        let mut multiple = match i.checked_mul(i) {
            Some(square) => square,
            None => continue,
        };
        while multiple <= value {
            struck_out[multiple as usize] = true;
            multiple = match multiple.checked_add(i) {
                Some(next) => next,
                None => break,
            };
        }
    }

    primes.extend(
        (bound.saturating_add(1)..=value).filter(|&i| !struck_out[i as usize]),
    );

    Ok(primes)
}
