//! Access to the vessel API.
//!
//! The rest of the crate only sees the [`VesselApi`] trait: a synchronous function taking a GraphQL document and
//! returning the raw response text. [`HttpVesselClient`] (behind the `http` feature) implements it over HTTP.

use crate::error::MeridianError;

/// Endpoint used when `MERIDIAN_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.staging.maritime.spire.sh/graphql";

/// Environment variable with the endpoint URL.
pub const API_URL_VAR: &str = "MERIDIAN_API_URL";

/// Environment variable with the bearer token.
pub const API_TOKEN_VAR: &str = "MERIDIAN_API_TOKEN";

/// Sends GraphQL documents to the vessel API.
pub trait VesselApi {
    /// Submits the document and returns the response body.
    fn request(&self, document: &str) -> Result<String, MeridianError>;
}

impl<T: VesselApi + ?Sized> VesselApi for &T {
    fn request(&self, document: &str) -> Result<String, MeridianError> {
        (**self).request(document)
    }
}

/// Connection parameters of the vessel API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint.
    pub url: String,
    /// Token sent in the `authorization: Bearer` header. No authorization header is sent if `None`.
    pub bearer_token: Option<String>,
    /// Value of the `user-agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            bearer_token: None,
            user_agent: format!("meridian/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from `MERIDIAN_API_URL` and `MERIDIAN_API_TOKEN` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = non_empty(API_URL_VAR) {
            config.url = url;
        }
        config.bearer_token = non_empty(API_TOKEN_VAR);

        if config.bearer_token.is_none() {
            log::warn!("{API_TOKEN_VAR} is not set, requests will be sent without authorization");
        }

        config
    }

    /// Sets the endpoint URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[cfg(feature = "http")]
pub use http::HttpVesselClient;

#[cfg(feature = "http")]
mod http {
    use log::info;
    use reqwest::blocking::Client;
    use reqwest::header::{ACCEPT, CONTENT_TYPE};

    use super::{ClientConfig, VesselApi};
    use crate::error::MeridianError;

    /// [`VesselApi`] implementation posting the documents over HTTP.
    #[derive(Debug, Clone)]
    pub struct HttpVesselClient {
        client: Client,
        config: ClientConfig,
    }

    impl HttpVesselClient {
        /// Creates a new client.
        pub fn new(config: ClientConfig) -> Result<Self, MeridianError> {
            let client = Client::builder().user_agent(&config.user_agent).build()?;
            Ok(Self { client, config })
        }

        /// Configuration of the client.
        pub fn config(&self) -> &ClientConfig {
            &self.config
        }
    }

    impl VesselApi for HttpVesselClient {
        fn request(&self, document: &str) -> Result<String, MeridianError> {
            let payload = serde_json::json!({ "query": document.trim() });

            let mut request = self
                .client
                .post(&self.config.url)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json, multipart/mixed")
                .body(payload.to_string());
            if let Some(token) = &self.config.bearer_token {
                request = request.bearer_auth(token);
            }

            info!("Sending vessels query to {}", self.config.url);
            let response = request.send()?;
            let status = response.status();
            let body = response.text()?;

            if !status.is_success() {
                info!("Vessels query to {} failed: {status}", self.config.url);
                return Err(MeridianError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            info!("Received {} bytes from {}", body.len(), self.config.url);
            Ok(body)
        }
    }
}
