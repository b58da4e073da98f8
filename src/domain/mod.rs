// Domain layer: positional model and the generator port. No dependencies beyond the crate error type.

pub mod model;
pub mod ports;
