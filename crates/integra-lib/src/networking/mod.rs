use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::trace;

/// Transport-level errors for platform API communication
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {source}")]
    Connection {
        #[from]
        source: reqwest::Error,
    },

    #[error("Request to '{endpoint}' returned status {status}")]
    Status { status: u16, endpoint: String },

    #[error("Semaphore acquire error: {source}")]
    Acquire {
        #[from]
        source: tokio::sync::AcquireError,
    },

    #[error("Response from '{endpoint}' is not a JSON {expected}")]
    UnexpectedPayload {
        endpoint: String,
        expected: &'static str,
    },

    #[error("Invalid concurrency limit: {count} (must be > 0)")]
    InvalidConcurrency { count: u32 },
}

/// Concurrency-aware HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of in-flight requests (from CLI --net-jobs)
    pub max_inflight: Option<u32>,
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_inflight: None,
            timeout_seconds: 30,
        }
    }
}

/// Shared HTTP client for all platform adapters
///
/// Wraps a single reqwest client behind a semaphore so every request made
/// through the library, including lazy dependency lookups, competes for the
/// same in-flight budget.
#[derive(Debug)]
pub struct PlatformClient {
    client: Client,
    semaphore: Arc<Semaphore>,
    inflight_limit: u32,
}

impl PlatformClient {
    /// Create a client with an explicit or derived concurrency limit
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let inflight_limit = match config.max_inflight {
            Some(0) => return Err(TransportError::InvalidConcurrency { count: 0 }),
            Some(n) => n,
            None => thread::available_parallelism()
                .map(|p| p.get() as u32 * 2)
                .unwrap_or(8),
        };

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .build()?;

        trace!(
            inflight_limit,
            timeout_seconds = config.timeout_seconds,
            "Platform client initialized"
        );

        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(inflight_limit as usize)),
            inflight_limit,
        })
    }

    /// Maximum number of concurrent requests this client allows
    pub fn inflight_limit(&self) -> u32 {
        self.inflight_limit
    }

    /// Fetch a URL as text, holding a concurrency permit for the duration
    ///
    /// `auth` is an optional header name/value pair; each platform decides
    /// which header carries its key.
    pub async fn get_text(
        &self,
        url: &str,
        auth: Option<(&'static str, &str)>,
    ) -> Result<String, TransportError> {
        let _permit = self.semaphore.acquire().await?;

        trace!(url, "GET");

        let mut request = self.client.get(url);
        if let Some((header, value)) = auth {
            request = request.header(header, value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                endpoint: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch a URL and require a top-level JSON object
    pub async fn fetch_object(
        &self,
        url: &str,
        auth: Option<(&'static str, &str)>,
    ) -> Result<serde_json::Map<String, Value>, TransportError> {
        let body = self.get_text(url, auth).await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(TransportError::UnexpectedPayload {
                endpoint: url.to_string(),
                expected: "object",
            }),
        }
    }

    /// Fetch a URL and require a top-level JSON array
    pub async fn fetch_array(
        &self,
        url: &str,
        auth: Option<(&'static str, &str)>,
    ) -> Result<Vec<Value>, TransportError> {
        let body = self.get_text(url, auth).await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(items)) => Ok(items),
            _ => Err(TransportError::UnexpectedPayload {
                endpoint: url.to_string(),
                expected: "array",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
