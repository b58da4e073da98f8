//! Standard-form fragments for each digit at each power of ten.
//!
//! Subtractive forms (IV, IX, XL, XC, CD, CM) are written out in the tables
//! rather than derived.

use crate::domain::model::Position;
use crate::utils::error::{RomanError, Result};

const UNITS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 9] = ["X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 9] = ["C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const THOUSANDS: [&str; 3] = ["M", "MM", "MMM"];

impl Position {
    /// Fragments indexed by `digit - 1`.
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Position::Units => &UNITS,
            Position::Tens => &TENS,
            Position::Hundreds => &HUNDREDS,
            Position::Thousands => &THOUSANDS,
        }
    }

    pub fn fragment(self, digit: i32) -> Result<&'static str> {
        let max = self.max_digit();
        if digit < 1 || digit > max {
            return Err(RomanError::DigitOutOfRange {
                position: self.power_of_ten(),
                digit,
                max,
            });
        }
        Ok(self.symbols()[(digit - 1) as usize])
    }
}

/// Looks up the fragment for `digit` at power of ten `position` (0 = units,
/// 3 = thousands).
pub fn lookup(position: i32, digit: i32) -> Result<&'static str> {
    Position::try_from(position)?.fragment(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_fragments() {
        assert_eq!(lookup(0, 4), Ok("IV"));
        assert_eq!(lookup(1, 9), Ok("XC"));
        assert_eq!(lookup(2, 4), Ok("CD"));
        assert_eq!(lookup(2, 9), Ok("CM"));
        assert_eq!(lookup(3, 3), Ok("MMM"));
    }

    #[test]
    fn test_tables_match_max_digit() {
        for position in Position::DESCENDING {
            assert_eq!(position.symbols().len() as i32, position.max_digit());
        }
    }

    #[test]
    fn test_position_checked_before_digit() {
        assert_eq!(
            lookup(7, 0),
            Err(RomanError::UnknownPosition { position: 7 })
        );
    }
}
