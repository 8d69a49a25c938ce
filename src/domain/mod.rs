// Domain layer: comparison records, the response schema and the ports to external systems.

pub mod model;
pub mod ports;
pub mod schema;
