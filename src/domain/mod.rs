// Domain layer: item schema, profile/result documents and ports. No engine logic here.

pub mod model;
pub mod ports;
pub mod schema;
