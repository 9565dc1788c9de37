// Domain layer: API shapes, form inputs and the ports the client is built on.

pub mod model;
pub mod ports;
