pub mod greeter;

pub use crate::domain::model::GreetingReport;
pub use crate::domain::ports::{GreeterService, ServiceResolver};
pub use crate::utils::error::Result;
