//! Parsing utilities for version strings
//!
//! Pure parsing functions with no I/O dependencies.

use crate::PrimesError;

/// Parse a version string in the format "major.minor[.micro][-pre][+build]"
///
/// Returns `(major, minor, micro)`. Micro defaults to 0; pre-release and
/// build suffixes are accepted and ignored.
pub fn parse_version(version_str: &str) -> Result<(u32, u32, u32), PrimesError> {
    let core_part = version_str
        .split(['-', '+'])
        .next()
        .unwrap_or(version_str);

    if core_part.is_empty() {
        return Err(PrimesError::InvalidVersion);
    }

    let mut version_parts = [0u32; 3];
    let mut count = 0;

    for part in core_part.split('.') {
        if count >= 3 {
            return Err(PrimesError::InvalidVersion); // Too many parts
        }
        version_parts[count] = parse_u32(part)?;
        count += 1;
    }

    if count < 2 {
        return Err(PrimesError::InvalidVersion); // Need at least major.minor
    }

    Ok((version_parts[0], version_parts[1], version_parts[2]))
}

/// Parse a u32 from ASCII digits
fn parse_u32(s: &str) -> Result<u32, PrimesError> {
    if s.is_empty() {
        return Err(PrimesError::InvalidVersion);
    }

    let mut result: u32 = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(PrimesError::InvalidVersion);
        }
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(u32::from(byte - b'0')))
            .ok_or(PrimesError::InvalidVersion)?;
    }

    Ok(result)
}
