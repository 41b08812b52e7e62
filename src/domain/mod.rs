// Domain layer: the greeting model and the ports the client calls through.
// Nothing here knows how the external object is activated or invoked.

pub mod model;
pub mod ports;
