use std::path::Path;

use crate::error::{Error, Result};

pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Parse a reading from a device file. Surrounding whitespace (the trailing
/// newline) is ignored; the value must be finite and non-negative.
pub fn parse_reading(content: &str, path: &Path) -> Result<f64> {
    let trimmed = content.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0. => Ok(value),
        _ => Err(Error::Malformed {
            value: trimmed.to_owned(),
            path: path.to_path_buf(),
        }),
    }
}

/// Parse a user supplied percentage. Any finite number is accepted,
/// out-of-range values are left to clamping.
pub fn parse_percentage(flag: &'static str, arg: &str) -> Result<f64> {
    match arg.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidPercentage {
            flag,
            arg: arg.to_owned(),
        }),
    }
}
