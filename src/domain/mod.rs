// Domain layer: captured-content models and the ports the host side implements.

pub mod model;
pub mod ports;
