// Domain layer: models and ports. Implementations live in core.

pub mod model;
pub mod ports;
