pub mod generator;
pub mod symbols;

pub use crate::domain::model::{Decomposition, Position};
pub use crate::domain::ports::RomanNumeralGenerator;
