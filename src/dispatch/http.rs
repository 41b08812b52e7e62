use crate::dispatch::ServiceRegistry;
use crate::domain::ports::{GreeterService, ServiceResolver};
use crate::utils::error::{GreeterError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ActivateRequest<'a> {
    prog_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ActivateResponse {
    object_id: String,
}

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    method: &'a str,
    args: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    result: serde_json::Value,
}

/// Resolves a ProgID to a live object handle: registry lookup first, then an
/// activation request against the registered endpoint. Both failure modes
/// are resolution errors; no operation is invoked on either path.
pub struct HttpResolver {
    registry: ServiceRegistry,
    client: Client,
}

impl HttpResolver {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            registry,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ServiceResolver for HttpResolver {
    type Service = HttpGreeterService;

    async fn resolve(&self, prog_id: &str) -> Result<HttpGreeterService> {
        let endpoint = self
            .registry
            .lookup(prog_id)
            .ok_or_else(|| GreeterError::ResolutionError {
                name: prog_id.to_string(),
                reason: "ProgID is not registered".to_string(),
            })?;

        tracing::debug!("Activating {} at {}", prog_id, endpoint);
        let response = self
            .client
            .post(format!("{}/activate", endpoint))
            .json(&ActivateRequest { prog_id })
            .send()
            .await
            .map_err(|e| GreeterError::ResolutionError {
                name: prog_id.to_string(),
                reason: format!("activation endpoint unreachable: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(GreeterError::ResolutionError {
                name: prog_id.to_string(),
                reason: format!("activation rejected with status {}", response.status()),
            });
        }

        let activation: ActivateResponse =
            response
                .json()
                .await
                .map_err(|e| GreeterError::ResolutionError {
                    name: prog_id.to_string(),
                    reason: format!("malformed activation response: {}", e),
                })?;

        tracing::debug!("Activated object: {}", activation.object_id);
        Ok(HttpGreeterService {
            client: self.client.clone(),
            endpoint: endpoint.to_string(),
            object_id: activation.object_id,
        })
    }
}

/// Handle to one activated object instance.
///
/// The server side owns the instance; the handle is dropped at the end of
/// the run scope, with no explicit release call.
pub struct HttpGreeterService {
    client: Client,
    endpoint: String,
    object_id: String,
}

impl HttpGreeterService {
    async fn invoke(
        &self,
        method: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/objects/{}/invoke", self.endpoint, self.object_id);
        tracing::debug!("Invoking {} on object {}", method, self.object_id);

        let response = self
            .client
            .post(&url)
            .json(&InvokeRequest { method, args })
            .send()
            .await
            .map_err(|e| GreeterError::InvocationError {
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = if body.is_empty() {
                format!("server returned status {}", status)
            } else {
                format!("server returned status {}: {}", status, body)
            };
            return Err(GreeterError::InvocationError {
                method: method.to_string(),
                reason,
            });
        }

        let payload: InvokeResponse =
            response
                .json()
                .await
                .map_err(|e| GreeterError::InvocationError {
                    method: method.to_string(),
                    reason: format!("malformed invoke response: {}", e),
                })?;

        Ok(payload.result)
    }

    fn expect_string(method: &str, value: serde_json::Value) -> Result<String> {
        match value {
            serde_json::Value::String(s) => Ok(s),
            other => Err(GreeterError::InvocationError {
                method: method.to_string(),
                reason: format!("expected a string result, got: {}", other),
            }),
        }
    }
}

#[async_trait]
impl GreeterService for HttpGreeterService {
    async fn say_hello(&self) -> Result<()> {
        // Side effect only; the result payload is discarded.
        self.invoke("SayHello", Vec::new()).await?;
        Ok(())
    }

    async fn say_hello_str(&self) -> Result<String> {
        let value = self.invoke("SayHelloStr", Vec::new()).await?;
        Self::expect_string("SayHelloStr", value)
    }

    async fn say_hello_to(&self, name: &str) -> Result<String> {
        let value = self
            .invoke(
                "SayHelloTo",
                vec![serde_json::Value::String(name.to_string())],
            )
            .await?;
        Self::expect_string("SayHelloTo", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_request_wire_shape() {
        let request = InvokeRequest {
            method: "SayHelloTo",
            args: vec![serde_json::Value::String("John Doe".to_string())],
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"method": "SayHelloTo", "args": ["John Doe"]})
        );
    }

    #[test]
    fn test_invoke_response_defaults_to_null_result() {
        let payload: InvokeResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.result.is_null());
    }

    #[test]
    fn test_expect_string_rejects_non_string_results() {
        let err = HttpGreeterService::expect_string("SayHelloStr", serde_json::json!(42))
            .unwrap_err();
        assert!(matches!(err, GreeterError::InvocationError { .. }));

        let ok = HttpGreeterService::expect_string(
            "SayHelloStr",
            serde_json::json!("Hello, World!"),
        )
        .unwrap();
        assert_eq!(ok, "Hello, World!");
    }
}
