use crate::utils::error::RomanError;

/// A power-of-ten digit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Units,
    Tens,
    Hundreds,
    Thousands,
}

impl Position {
    /// Most significant first, the order fragments are concatenated in.
    pub const DESCENDING: [Position; 4] = [
        Position::Thousands,
        Position::Hundreds,
        Position::Tens,
        Position::Units,
    ];

    pub fn power_of_ten(self) -> i32 {
        match self {
            Position::Units => 0,
            Position::Tens => 1,
            Position::Hundreds => 2,
            Position::Thousands => 3,
        }
    }

    /// Thousands stop at 3 since 4000 has no standard-form numeral.
    pub fn max_digit(self) -> i32 {
        match self {
            Position::Thousands => 3,
            _ => 9,
        }
    }
}

impl TryFrom<i32> for Position {
    type Error = RomanError;

    fn try_from(power: i32) -> Result<Self, Self::Error> {
        match power {
            0 => Ok(Position::Units),
            1 => Ok(Position::Tens),
            2 => Ok(Position::Hundreds),
            3 => Ok(Position::Thousands),
            position => Err(RomanError::UnknownPosition { position }),
        }
    }
}

/// The four decimal digits of an input value.
///
/// Values of 10000 or more leave a thousands digit above 9, and negative
/// values produce digits that are zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    pub thousands: i32,
    pub hundreds: i32,
    pub tens: i32,
    pub units: i32,
}

impl Decomposition {
    pub fn from_value(value: i32) -> Self {
        let thousands = value / 1000;
        let rest = value % 1000;
        let hundreds = rest / 100;
        let rest = rest % 100;
        let tens = rest / 10;
        let units = rest % 10;

        Self {
            thousands,
            hundreds,
            tens,
            units,
        }
    }

    pub fn digit(&self, position: Position) -> i32 {
        match position {
            Position::Units => self.units,
            Position::Tens => self.tens,
            Position::Hundreds => self.hundreds,
            Position::Thousands => self.thousands,
        }
    }

    /// `(position, digit)` pairs from thousands down to units.
    pub fn pairs(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        Position::DESCENDING
            .into_iter()
            .map(move |position| (position, self.digit(position)))
    }
}
