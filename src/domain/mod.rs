// Domain layer: records, the company field table and the ports the pipeline depends on.

pub mod fields;
pub mod model;
pub mod ports;
