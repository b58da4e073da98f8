/// Converts integers to Roman numerals.
///
/// An empty string means the value has no standard-form numeral.
pub trait RomanNumeralGenerator: Send + Sync {
    fn generate(&self, value: i32) -> String;
}
