//! Two-phase size-query/fill buffer protocol
//!
//! Callers first query with an empty buffer to learn the required size,
//! then call again with a buffer of at least that length. A write only
//! happens when the buffer can hold the complete result.

/// Copy `results` into `buffer` if it fits and return the needed count
///
/// A buffer shorter than `results` is left untouched.
pub fn fill_buffer<T: Copy>(results: &[T], buffer: &mut [T]) -> u64 {
    let needed = results.len();
    if buffer.len() >= needed {
        buffer[..needed].copy_from_slice(results);
    }
    needed as u64
}
