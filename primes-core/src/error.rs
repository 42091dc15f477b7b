//! Error types for prime calculations

/// Errors that can occur while configuring, running or querying a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimesError {
    /// Malformed argument (zero progress steps, fraction out of range, ...)
    InvalidParam,
    /// A result was requested before a calculation completed
    NoResultAvailable,
    /// The progress callback requested an abort
    CalculationAborted,
    /// The calculator is still marked as computing
    CalculationInProgress,
    /// `calculate` was called before any value was set
    ValueNotSet,
    /// The value exceeds the configured sieve limit
    ValueTooLarge,
    /// The sieve marker array could not be allocated
    InsufficientMemory,
    /// A version string could not be parsed or is incompatible
    InvalidVersion,
}

/// Coarse classification of [`PrimesError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller used the API incorrectly
    Usage,
    /// The computation was cancelled cooperatively
    Cancelled,
    /// The system ran out of a resource
    Resource,
}

impl PrimesError {
    /// Stable numeric error code.
    ///
    /// Codes 2, 9 and 10 keep the numbering of the C interface this library
    /// grew out of; newer errors are numbered from 100.
    pub const fn code(&self) -> u32 {
        match self {
            PrimesError::InvalidParam => 2,
            PrimesError::NoResultAvailable => 9,
            PrimesError::CalculationAborted => 10,
            PrimesError::CalculationInProgress => 100,
            PrimesError::ValueNotSet => 101,
            PrimesError::ValueTooLarge => 102,
            PrimesError::InsufficientMemory => 103,
            PrimesError::InvalidVersion => 104,
        }
    }

    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            PrimesError::CalculationAborted => ErrorCategory::Cancelled,
            PrimesError::InsufficientMemory => ErrorCategory::Resource,
            PrimesError::InvalidParam
            | PrimesError::NoResultAvailable
            | PrimesError::CalculationInProgress
            | PrimesError::ValueNotSet
            | PrimesError::ValueTooLarge
            | PrimesError::InvalidVersion => ErrorCategory::Usage,
        }
    }
}

impl core::fmt::Display for PrimesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            PrimesError::InvalidParam => "Invalid parameter",
            PrimesError::NoResultAvailable => "No result available",
            PrimesError::CalculationAborted => "Calculation aborted",
            PrimesError::CalculationInProgress => "Calculation in progress",
            PrimesError::ValueNotSet => "No value set",
            PrimesError::ValueTooLarge => "Value exceeds configured limit",
            PrimesError::InsufficientMemory => "Insufficient memory for sieve",
            PrimesError::InvalidVersion => "Invalid or incompatible version",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for PrimesError {}

/// Result type for prime calculations
pub type Result<T> = core::result::Result<T, PrimesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_c_interface() {
        assert_eq!(PrimesError::InvalidParam.code(), 2);
        assert_eq!(PrimesError::NoResultAvailable.code(), 9);
        assert_eq!(PrimesError::CalculationAborted.code(), 10);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            PrimesError::CalculationAborted.category(),
            ErrorCategory::Cancelled
        );
        assert_eq!(
            PrimesError::InsufficientMemory.category(),
            ErrorCategory::Resource
        );
        assert_eq!(PrimesError::ValueNotSet.category(), ErrorCategory::Usage);
    }
}
