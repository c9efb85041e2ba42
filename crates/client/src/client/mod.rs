//! HTTP client for the labdesk API.

pub mod areas;

use labdesk_core::payload::decode_list;
use labdesk_core::FetchError;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{fetch_error, ClientError, Result};

/// HTTP client for the labdesk API.
#[derive(Debug, Clone)]
pub struct LabdeskClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl LabdeskClient {
    /// Create a new client from a configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token when one is configured.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode a single JSON object.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> labdesk_core::Result<T> {
        let body = self.send(builder, path).await?;
        serde_json::from_slice(&body).map_err(FetchError::from)
    }

    /// Send a request and decode a list, unwrapping paginated envelopes.
    async fn send_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> labdesk_core::Result<Vec<T>> {
        let body = self.send(builder, path).await?;
        decode_list(&body)
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> labdesk_core::Result<Vec<u8>> {
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(path, error = %err, "Request failed");
            fetch_error(err)
        })?;
        tracing::debug!(path, status = response.status().as_u16(), "Response received");
        self.handle_response(response, path).await
    }

    /// Map non-2xx responses to errors and return the body of successful ones.
    async fn handle_response(
        &self,
        response: Response,
        path: &str,
    ) -> labdesk_core::Result<Vec<u8>> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(fetch_error)?;
            Ok(body.to_vec())
        } else if status.as_u16() == 404 {
            Err(FetchError::NotFound {
                resource: path.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}
