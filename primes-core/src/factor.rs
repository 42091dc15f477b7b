//! Prime factor value type

/// A prime together with the largest exponent dividing the factorized value
///
/// Factors produced by the factorization algorithm always have a
/// multiplicity of at least one and are ordered ascending by prime, so the
/// derived ordering (prime first) matches the result order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeFactor {
    /// The prime
    pub prime: u64,
    /// How many times the prime divides the value
    pub multiplicity: u32,
}

impl PrimeFactor {
    /// Create a new prime factor
    pub const fn new(prime: u64, multiplicity: u32) -> Self {
        Self {
            prime,
            multiplicity,
        }
    }

    /// `prime^multiplicity`, or `None` on overflow
    pub const fn power(&self) -> Option<u64> {
        self.prime.checked_pow(self.multiplicity)
    }
}

impl core::fmt::Display for PrimeFactor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}^{}", self.prime, self.multiplicity)
    }
}

/// Multiply a factorization back together
///
/// Returns `Some(1)` for an empty slice and `None` if the product overflows.
pub fn product(factors: &[PrimeFactor]) -> Option<u64> {
    factors
        .iter()
        .try_fold(1u64, |acc, factor| acc.checked_mul(factor.power()?))
}
