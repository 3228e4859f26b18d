// Domain layer: repository records, display cards and the ports the core talks through.

pub mod model;
pub mod ports;
