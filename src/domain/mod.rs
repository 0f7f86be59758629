// Domain layer: fixture models and the sink port. No spreadsheet library types here.

pub mod model;
pub mod ports;
