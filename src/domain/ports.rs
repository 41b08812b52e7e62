use crate::utils::error::Result;
use async_trait::async_trait;

/// The capability set the client needs from the external HelloWorld object.
///
/// SayHello is side effect only; its result carries no data. The other two
/// return greeting strings.
#[async_trait]
pub trait GreeterService: Send + Sync {
    async fn say_hello(&self) -> Result<()>;
    async fn say_hello_str(&self) -> Result<String>;
    async fn say_hello_to(&self, name: &str) -> Result<String>;
}

/// Locates and activates a named external service.
///
/// Implementations own all activation vocabulary (registries, endpoints,
/// transports); the engine only sees this trait. Resolution must fail
/// without attempting any operation invocation.
#[async_trait]
pub trait ServiceResolver: Send + Sync {
    type Service: GreeterService;

    async fn resolve(&self, prog_id: &str) -> Result<Self::Service>;
}
