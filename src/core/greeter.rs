use crate::core::{GreeterService, GreetingReport, Result, ServiceResolver};
use crate::utils::error::GreeterError;
use std::io::Write;

/// ProgID the external HelloWorld object is registered under.
pub const PROG_ID: &str = "HelloWorldLib.HelloWorld";

/// Name passed to SayHelloTo.
pub const RECIPIENT: &str = "John Doe";

pub struct GreeterEngine<R: ServiceResolver> {
    resolver: R,
    prog_id: String,
    recipient: String,
}

impl<R: ServiceResolver> GreeterEngine<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_target(resolver, PROG_ID, RECIPIENT)
    }

    pub fn with_target(
        resolver: R,
        prog_id: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            prog_id: prog_id.into(),
            recipient: recipient.into(),
        }
    }

    /// Runs the fixed three-call sequence against the resolved service.
    ///
    /// The first failure aborts the remaining steps. The handle lives only
    /// for this scope and is dropped on return, so consecutive runs resolve
    /// a fresh handle each time.
    pub async fn run(&self) -> Result<GreetingReport> {
        tracing::info!("Resolving service: {}", self.prog_id);
        let service = self.resolver.resolve(&self.prog_id).await?;

        // Side effect only; nothing to capture.
        tracing::debug!("Invoking SayHello");
        service.say_hello().await?;

        tracing::debug!("Invoking SayHelloStr");
        let greeting = service.say_hello_str().await?;

        tracing::debug!("Invoking SayHelloTo({})", self.recipient);
        let personal_greeting = service.say_hello_to(&self.recipient).await?;

        Ok(GreetingReport {
            greeting,
            personal_greeting,
        })
    }
}

/// Success output: the two captured strings, one per line, in capture order.
pub fn write_report<W: Write>(out: &mut W, report: &GreetingReport) -> std::io::Result<()> {
    writeln!(out, "{}", report.greeting)?;
    writeln!(out, "{}", report.personal_greeting)
}

/// Failure output: a single formatted line, whatever the error kind.
pub fn write_failure<W: Write>(out: &mut W, error: &GreeterError) -> std::io::Result<()> {
    writeln!(out, "An error occurred: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_two_lines_in_capture_order() {
        let report = GreetingReport {
            greeting: "Hello, World!".to_string(),
            personal_greeting: "Hello, John Doe!".to_string(),
        };

        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello, World!\nHello, John Doe!\n"
        );
    }

    #[test]
    fn test_write_failure_single_formatted_line() {
        let error = GreeterError::ResolutionError {
            name: PROG_ID.to_string(),
            reason: "ProgID is not registered".to_string(),
        };

        let mut out = Vec::new();
        write_failure(&mut out, &error).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with("An error occurred: "));
        assert_eq!(rendered.lines().count(), 1);
    }
}
