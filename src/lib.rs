pub mod config;
pub mod core;
pub mod dispatch;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::greeter::{GreeterEngine, PROG_ID, RECIPIENT};
pub use dispatch::{HttpGreeterService, HttpResolver, ServiceRegistry};
pub use domain::model::GreetingReport;
pub use utils::error::{GreeterError, Result};
