// Domain layer: value types and the strategy port. No dependencies beyond serde.

pub mod model;
pub mod ports;
