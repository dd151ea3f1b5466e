//! Byte-count formatting

use crate::{Result, TextError};
use humansize::{BINARY, format_size};

/// Format a raw byte count as a human-readable magnitude string.
///
/// Empty input produces empty output without an error; anything else must
/// parse as a non-negative integer.
///
/// # Example
///
/// ```
/// use veneer_text::human_size;
///
/// assert_eq!(human_size("1024").unwrap(), "1 KiB");
/// assert_eq!(human_size("").unwrap(), "");
/// assert!(human_size("abc").is_err());
/// ```
pub fn human_size(size: &str) -> Result<String> {
    if size.is_empty() {
        return Ok(String::new());
    }

    let bytes: u64 = size
        .parse()
        .map_err(|_| TextError::NotANumber(size.to_string()))?;

    Ok(format_size(bytes, BINARY))
}
