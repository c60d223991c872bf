// Domain layer: models and ports. Concrete HTTP and terminal code lives under adapters.

pub mod model;
pub mod ports;
