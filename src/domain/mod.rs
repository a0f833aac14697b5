// Domain layer: sound literals, scene selectors and the ports every pattern plugs into.

pub mod model;
pub mod ports;
