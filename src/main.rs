use clap::Parser;
use greeter_client::core::greeter::{write_failure, write_report};
use greeter_client::utils::{logger, validation::Validate};
use greeter_client::{CliConfig, GreeterEngine, HttpResolver, ServiceRegistry, PROG_ID};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greeter-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut registry = ServiceRegistry::new();
    registry.register(PROG_ID, config.endpoint.clone());

    let engine = GreeterEngine::new(HttpResolver::new(registry));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Greeting sequence completed");
            write_report(&mut out, &report)?;
        }
        Err(e) => {
            tracing::error!("❌ Greeting sequence failed: {}", e);
            // Demo policy: report the failure once and still exit 0.
            write_failure(&mut out, &e)?;
        }
    }

    Ok(())
}
