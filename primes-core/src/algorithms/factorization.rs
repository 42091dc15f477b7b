//! Trial-division factorization

use alloc::vec::Vec;

use crate::{PrimeFactor, PrimesError, Progress, ProgressObserver, Result};

/// Factorize `value` by trial division
///
/// Every candidate from 2 up to the shrinking remainder is tried in turn;
/// a candidate dividing the remainder is divided out as often as possible
/// and recorded with that count. The loop stops once the candidate exceeds
/// the remainder, so 0 and 1 produce an empty factorization.
///
/// Before each candidate the observer receives `1 - remaining / value`.
/// An abort request fails the call with
/// [`PrimesError::CalculationAborted`] and drops the factors found so far.
///
/// Runs in O(p) where p is the largest prime factor.
pub fn factorize<O>(value: u64, observer: &mut O) -> Result<Vec<PrimeFactor>>
where
    O: ProgressObserver + ?Sized,
{
    let mut factors = Vec::new();
    let mut remaining = value;
    let mut candidate: u64 = 2;

    while candidate <= remaining {
        let fraction = 1.0 - remaining as f32 / value as f32;
        if observer.report(fraction) == Progress::Abort {
            return Err(PrimesError::CalculationAborted);
        }

        let mut multiplicity = 0u32;
        while remaining % candidate == 0 {
            multiplicity += 1;
            remaining /= candidate;
        }
        if multiplicity > 0 {
            factors.push(PrimeFactor::new(candidate, multiplicity));
        }

        candidate = match candidate.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(factors)
}
