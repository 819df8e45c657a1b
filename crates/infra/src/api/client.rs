//! Shared authenticated API client
//!
//! Every resource operation funnels through [`ApiClient::send_and_auth`] or
//! [`ApiClient::send_and_auth_empty`]: fetch a bearer token, attach the JSON
//! body, send through the retrying transport, map failures to [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use paypal_agreements_domain::constants::REQUEST_ID_HEADER;
use paypal_agreements_domain::{ClientConfig, PaypalError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::auth::{AccessTokenProvider, ClientCredentialsAuth};
use super::errors::{status_error, ApiError};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// API client shared by all resource extensions
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Arc<dyn AccessTokenProvider>,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `auth` - Authentication provider
    ///
    /// # Errors
    ///
    /// Returns error if the HttpClient cannot be created
    pub fn new(config: ClientConfig, auth: Arc<dyn AccessTokenProvider>) -> Result<Self, ApiError> {
        let http_client = Self::build_http_client(&config)?;

        Ok(Self { http_client: Arc::new(http_client), auth, config })
    }

    /// Create a client authenticating with the configured client id/secret
    ///
    /// The token provider shares this client's transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HttpClient cannot be created
    pub fn with_client_credentials(config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = Self::build_http_client(&config)?;
        let auth = ClientCredentialsAuth::with_http_client(&config, http_client.clone());

        Ok(Self { http_client: Arc::new(http_client), auth: Arc::new(auth), config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path (e.g. "/payments/billing-agreements")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    /// Send an authenticated request and decode the JSON response
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - API path appended to the configured base
    /// * `body` - Optional request body, encoded as JSON
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded, the token cannot be
    /// obtained, the transport fails, PayPal answers with a non-success
    /// status, or the response cannot be decoded
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn send_and_auth<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(method.clone(), path, body).await?;
        let status = response.status();

        // 204/205 carry no body; decode from null so `()` and `Option<_>` work
        let decoded = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| ApiError::from(PaypalError::from(InfraError::from(e))))?;
            serde_json::from_slice(&bytes)
        };
        let result: R =
            decoded.map_err(|e| ApiError::from(PaypalError::from(InfraError::from(e))))?;

        info!(%method, path = %path, "request successful");
        Ok(result)
    }

    /// Send an authenticated request whose response carries no payload
    ///
    /// Success is confirmed from the status alone; the body is not decoded.
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_and_auth`], minus decoding failures
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn send_and_auth_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method.clone(), path, body).await?;

        info!(%method, path = %path, "request successful");
        Ok(())
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send_and_auth::<(), R>(Method::GET, path, None).await
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);

        let body_bytes = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ApiError::InvalidInput(format!("Failed to serialize body: {}", e)))?;

        let token = self.auth.access_token().await?;

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(bytes) = body_bytes {
            request = request.body(bytes);
        }

        // One key per logical call, reused by every transport retry
        let request_id = (!method.is_safe()).then(|| Uuid::new_v4().to_string());
        if let Some(id) = &request_id {
            request = request.header(REQUEST_ID_HEADER, id.as_str());
        }

        debug!(%method, url = %url, request_id = ?request_id, "dispatching request");

        let budget = self.request_budget();
        let response = match tokio::time::timeout(budget, self.http_client.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::from(err)),
            Err(_) => {
                warn!(%method, url = %url, "request timed out");
                return Err(ApiError::Timeout(budget));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%method, url = %url, %status, "PayPal returned non-success status");
            if status == StatusCode::UNAUTHORIZED {
                self.auth.invalidate().await;
            }
            return Err(status_error(status, &url, &body));
        }

        Ok(response)
    }

    /// Upper bound for one call including transport retries and their backoff
    fn request_budget(&self) -> Duration {
        let attempts = u32::try_from(self.config.max_attempts.max(1)).unwrap_or(u32::MAX);
        self.config
            .timeout()
            .saturating_mul(attempts)
            .saturating_add(self.http_client.total_backoff())
    }

    fn build_http_client(config: &ClientConfig) -> Result<HttpClient, ApiError> {
        let mut builder =
            HttpClient::builder().timeout(config.timeout()).max_attempts(config.max_attempts);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder.build().map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config =
            self.config.ok_or_else(|| ApiError::Config("Client config not set".to_string()))?;
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;

        ApiClient::new(config, auth)
    }
}
