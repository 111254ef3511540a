/*
[INPUT]:  HTTP configuration (environment/base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::{ImxError, Result};

/// Base URLs for the Immutable X API
const MAINNET_BASE_URL: &str = "https://api.x.immutable.com";
const SANDBOX_BASE_URL: &str = "https://api.sandbox.x.immutable.com";

/// Header carrying the sender's Ethereum address on authenticated writes
pub const ETH_ADDRESS_HEADER: &str = "x-imx-eth-address";
/// Header carrying the EIP-191 signature of the signable message
pub const ETH_SIGNATURE_HEADER: &str = "x-imx-eth-signature";

/// Immutable X deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Mainnet,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Mainnet => MAINNET_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// REST client for the Immutable X public API
#[derive(Debug, Clone)]
pub struct ImxApiClient {
    http_client: Client,
    base_url: Url,
}

impl ImxApiClient {
    /// Create a mainnet client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), Environment::Mainnet)
    }

    /// Create a client for an environment with custom configuration
    pub fn with_config(config: ClientConfig, environment: Environment) -> Result<Self> {
        Self::with_config_and_base_url(config, environment.base_url())
    }

    /// Create a client against an explicit base URL (mock servers, proxies)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ImxError::Config(format!(
                "base URL cannot carry endpoint paths: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append endpoint segments to the base URL, keeping any path prefix
    fn url(&self, endpoint: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ImxError::Config(format!(
                    "base URL cannot carry endpoint paths: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder carrying the eth address/signature headers
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        eth_address: &str,
        eth_signature: &str,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(method, endpoint)?
            .header(ETH_ADDRESS_HEADER, eth_address)
            .header(ETH_SIGNATURE_HEADER, eth_signature))
    }

    /// Send a request and decode a 2xx JSON body.
    ///
    /// Non-2xx statuses become [`ImxError::Api`] with the body untouched.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "imx request completed");

        let body = response.text().await?;
        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "imx request rejected");
            return Err(ImxError::api_error(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
