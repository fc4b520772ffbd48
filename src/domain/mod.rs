// Domain layer: the Person model and the output port used by side-effecting operations.

pub mod model;
pub mod ports;
