use crate::domain::model::Decomposition;
use crate::domain::ports::RomanNumeralGenerator;
use crate::utils::error::Result;
use crate::utils::validation::validate_input;

/// Converts `value` to its standard-form Roman numeral.
///
/// Returns an empty string for 0, negative values and anything above 3999.
/// Use [`try_generate`] to find out why a value was rejected.
pub fn generate(value: i32) -> String {
    match assemble(value) {
        Ok(numeral) => numeral,
        Err(e) => {
            tracing::debug!(value, error = %e, "value has no standard-form numeral");
            String::new()
        }
    }
}

/// Like [`generate`], but reports out-of-range input as an error.
pub fn try_generate(value: i32) -> Result<String> {
    validate_input(value)?;
    assemble(value)
}

fn assemble(value: i32) -> Result<String> {
    let mut numeral = String::new();

    for (position, digit) in Decomposition::from_value(value).pairs() {
        if digit > 0 {
            numeral.push_str(position.fragment(digit)?);
        }
    }

    Ok(numeral)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFormGenerator;

impl StandardFormGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl RomanNumeralGenerator for StandardFormGenerator {
    fn generate(&self, value: i32) -> String {
        generate(value)
    }
}
