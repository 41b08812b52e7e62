// Dispatch layer: the activation-and-invocation binding. This is the only
// place that knows how a ProgID turns into a live object and how operations
// are called on it; everything above works through the domain ports.

pub mod http;
pub mod registry;

pub use http::{HttpGreeterService, HttpResolver};
pub use registry::ServiceRegistry;
