use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Default endpoint the HelloWorld ProgID is registered against.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7878";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greeter-client")]
#[command(about = "Invokes the registered HelloWorld service and prints its greetings")]
pub struct CliConfig {
    /// Activation endpoint for the HelloWorld service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = CliConfig::parse_from(["greeter-client"]);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config = CliConfig::parse_from(["greeter-client", "--endpoint", "not a url"]);
        assert!(config.validate().is_err());
    }
}
