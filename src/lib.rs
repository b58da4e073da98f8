pub mod core;
pub mod domain;
pub mod utils;

/// Smallest value with a standard-form numeral.
pub const MIN_VALUE: i32 = 1;
/// Largest value with a standard-form numeral.
pub const MAX_VALUE: i32 = 3999;

pub use crate::core::generator::{generate, try_generate, StandardFormGenerator};
pub use crate::core::symbols::lookup;
pub use crate::core::{Decomposition, Position, RomanNumeralGenerator};
pub use utils::error::{Result, RomanError};
