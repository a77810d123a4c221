use crate::engine::config::ClientConfig;
use crate::engine::endpoints::{ApiRequest, Method};
use crate::engine::error::HttpError;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use tracing::{debug, warn};

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: None,
            body: body.into(),
        }
    }
}

/// Sends one request and returns the whole response body.
///
/// Implementations must turn every failure, including non-2xx statuses, into an
/// [`HttpError`] rather than panicking, and must not retry.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, HttpError>> + Send;
}

/// [`Transport`] over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for all API requests.");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        debug!(
            "HTTP transport ready (timeout: {:?}, user agent: {})",
            config.timeout, config.user_agent
        );
        Ok(Self { client })
    }

    /// Wraps an already configured client, e.g. one with custom proxy settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, HttpError> {
        debug!("Sending {} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        debug!(
            "Received {} from {} ({} bytes)",
            status.as_u16(),
            request.url,
            body.len()
        );

        if !status.is_success() {
            return Err(HttpError::from_status(
                status.as_u16(),
                status.canonical_reason(),
                &request.url,
                &body,
            ));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
