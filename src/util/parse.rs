use std::collections::HashSet;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a comma separated list of u64 IDs.
///
/// Blank entries are ignored so `"1, 2,,3,"` parses to `{1, 2, 3}`.
///
/// # Returns
/// - `Ok(HashSet<u64>)` - All IDs in the list
/// - `Err(AppError::InternalErr(ParseStringId))` - An entry is not a valid u64
pub fn parse_u64_list(value: &str) -> Result<HashSet<u64>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_u64_from_string(entry.to_string()))
        .collect()
}

/// Parses a boolean flag, accepting `true/false`, `yes/no`, `on/off` and `1/0`.
pub fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(InternalError::ParseBool(value.to_string()).into()),
    }
}
