//! Library-level entry points

use primes_core::{LibraryVersion, Result, LIBRARY_VERSION};

use crate::calculator::HasErrorLog;
use crate::factorization::FactorizationCalculator;
use crate::sieve::SieveCalculator;

/// Version of the calculator interface implemented by this build
pub fn library_version() -> LibraryVersion {
    LIBRARY_VERSION
}

/// Fail with `InvalidVersion` unless this build satisfies `required`
/// ("major.minor[.micro]")
pub fn require_version(required: &str) -> Result<LibraryVersion> {
    LIBRARY_VERSION.require(required)?;
    Ok(LIBRARY_VERSION)
}

/// New factorization calculator with the default configuration
pub fn create_factorization_calculator() -> FactorizationCalculator {
    FactorizationCalculator::new()
}

/// New sieve calculator with the default configuration
pub fn create_sieve_calculator() -> SieveCalculator {
    SieveCalculator::new()
}

/// Last error recorded on `instance`
pub fn last_error<C: HasErrorLog + ?Sized>(instance: &C) -> Option<String> {
    instance.last_error_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primes_core::{Calculator, PrimesError};

    #[test]
    fn test_version() {
        let version = library_version();
        assert_eq!((version.major, version.minor, version.micro), (1, 2, 0));
        assert_eq!(version.to_string(), "1.2.0-alpha+23");
    }

    #[test]
    fn test_require_version() {
        assert!(require_version("1.0").is_ok());
        assert_eq!(
            require_version("3.0").err(),
            Some(PrimesError::InvalidVersion)
        );
    }

    #[test]
    fn test_last_error() {
        let mut sieve = create_sieve_calculator();
        assert_eq!(last_error(&sieve), None);
        assert!(sieve.calculate().is_err());
        assert_eq!(last_error(&sieve).as_deref(), Some("No value set"));

        let factorization = create_factorization_calculator();
        assert_eq!(last_error(&factorization), None);
    }
}
