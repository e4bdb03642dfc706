// Domain layer: pricebook models, sheet layout, reference text and ports.

pub mod model;
pub mod ports;
pub mod reference;
pub mod schema;
