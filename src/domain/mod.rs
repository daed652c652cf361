// Domain layer: line classification models and the storage/config ports.

pub mod model;
pub mod ports;
