use crate::utils::error::{RomanError, Result};
use crate::{MAX_VALUE, MIN_VALUE};

pub fn validate_range<T: PartialOrd + Copy>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Rejects values that have no standard-form numeral.
pub fn validate_input(value: i32) -> Result<()> {
    if !validate_range(value, MIN_VALUE, MAX_VALUE) {
        return Err(RomanError::ValueOutOfRange {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        });
    }
    Ok(())
}
