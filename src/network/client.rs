//! HTTP dispatcher - one outbound call per invocation, no retries

use crate::config::Config;
use crate::error::DispatchError;
use crate::models::{HttpMethod, Request, Response};

/// Issues requests through a shared `reqwest::Client`.
///
/// The client carries the configured timeout. Connection pooling, TLS and
/// redirects are left to reqwest.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DispatchError::Client(e.to_string()))?;

        Ok(Dispatcher {
            client,
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Send a request built from user input
    pub async fn send(&self, request: &Request) -> Result<Response, DispatchError> {
        let url = parse_url(&request.url)?;

        let mut req_builder = match request.method {
            HttpMethod::GET => self.client.get(url),
            HttpMethod::POST => self.client.post(url),
            HttpMethod::PUT => self.client.put(url),
            HttpMethod::DELETE => self.client.delete(url),
        };

        // Raw passthrough, no content-type negotiation
        if let Some(body) = request.payload() {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.method, url = %request.url, "Dispatching");

        let resp = req_builder
            .send()
            .await
            .map_err(|e| DispatchError::from_reqwest(e, self.timeout_secs))?;

        let status_code = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = resp
            .text()
            .await
            .map_err(|e| DispatchError::from_reqwest(e, self.timeout_secs))?;

        Ok(Response {
            status_code,
            headers,
            body,
        })
    }

    /// `send` without building a `Request` first
    pub async fn send_parts(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&str>,
    ) -> Result<Response, DispatchError> {
        let request = Request::new(method, url, body.map(str::to_string));
        self.send(&request).await
    }
}

/// Validate that `url` is an absolute http(s) URL
pub fn parse_url(url: &str) -> Result<reqwest::Url, DispatchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::InvalidUrl {
            url: url.to_string(),
            reason: "URL is empty".to_string(),
        });
    }

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| DispatchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(DispatchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
