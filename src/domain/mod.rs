// Domain layer: models and ports. Adapters for the carrier API and the session file live in `adapters`.

pub mod model;
pub mod ports;
