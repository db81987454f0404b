//! ID prefixes and random ID generation.
//!
//! IDs look like `aud-a3f8b2c1`: a short entity prefix, a dash, and 8 lowercase
//! hex characters from the OS random source.

use crate::errors::CoreError;

pub const PREFIX_AUDIT: &str = "aud";
pub const PREFIX_USER: &str = "usr";

/// Generate a prefixed random ID, e.g. `"usr-0c1d9e2f"`.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Random(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
