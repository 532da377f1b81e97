// Domain layer: transient values of a probe run and the ports the engine depends on.

pub mod model;
pub mod ports;
