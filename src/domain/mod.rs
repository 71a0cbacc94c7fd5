// Domain layer: data records and the process-launching port. No I/O here.

pub mod model;
pub mod ports;
