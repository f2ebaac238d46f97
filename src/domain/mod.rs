// Domain layer: core models and ports (interfaces). Diagnostics are mirrored to tracing.

pub mod model;
pub mod ports;
