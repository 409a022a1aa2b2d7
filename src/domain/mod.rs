// Domain layer: parsed names and the policy port. No I/O.

pub mod model;
pub mod ports;
