// Domain layer: request/response models and the ports the handler is wired through.

pub mod model;
pub mod ports;
