use std::time::Duration;

use paypal_agreements_domain::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS, REQUEST_ID_HEADER,
};
use paypal_agreements_domain::PaypalError;
use reqwest::{Client as ReqwestClient, Method, Request, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// HTTP transport with built-in retry and timeout support.
///
/// Server errors (5xx) and transient network failures are retried with
/// exponential backoff, but only for requests PayPal can safely see twice:
/// idempotent methods, or requests carrying a `PayPal-Request-Id` key.
/// Anything else is sent exactly once.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send a request, retrying only when replaying it cannot duplicate a
    /// side effect.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, PaypalError> {
        self.send_with_policy(builder, false).await
    }

    /// Send a request the caller knows is safe to repeat whatever its method
    /// (e.g. the OAuth2 token exchange).
    pub async fn send_replayable(&self, builder: RequestBuilder) -> Result<Response, PaypalError> {
        self.send_with_policy(builder, true).await
    }

    /// Longest total time spent sleeping between attempts.
    pub fn total_backoff(&self) -> Duration {
        (1..self.max_attempts)
            .map(|retry| self.backoff_delay(retry))
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    async fn send_with_policy(
        &self,
        builder: RequestBuilder,
        replayable: bool,
    ) -> Result<Response, PaypalError> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let cloned_builder = builder.try_clone().ok_or_else(|| {
                PaypalError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;
            let request = cloned_builder.build().map_err(|err| PaypalError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            let can_retry = attempt < self.max_attempts && (replayable || is_replay_safe(&request));
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if status.is_server_error() && can_retry {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(err) => {
                    if can_retry && should_retry_error(&err) {
                        debug!(attempt, %method, %url, error = %err, "HTTP request failed, retrying");
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }

                    warn!(attempt, %method, %url, error = %err, "HTTP request failed");
                    return Err(PaypalError::from(InfraError::from(err)));
                }
            }
        }
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(200),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Delay before the first retry; doubled for each further retry.
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    /// User agent sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<HttpClient, PaypalError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| PaypalError::from(InfraError::from(err)))?;

        Ok(HttpClient { client, max_attempts: self.max_attempts, base_backoff: self.base_backoff })
    }
}

fn is_replay_safe(request: &Request) -> bool {
    request.method().is_idempotent() || request.headers().contains_key(REQUEST_ID_HEADER)
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use reqwest::StatusCode;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_with_defaults() -> HttpClient {
        HttpClient::builder()
            .base_backoff(Duration::from_millis(10))
            .max_attempts(3)
            .build()
            .expect("http client")
    }

    /// Respond 503 for the first `failures` calls, then 204
    fn flaky(failures: usize) -> (Arc<AtomicUsize>, impl Fn(&wiremock::Request) -> ResponseTemplate) {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let responder = move |_req: &wiremock::Request| -> ResponseTemplate {
            if counter.fetch_add(1, Ordering::SeqCst) < failures {
                ResponseTemplate::new(503)
            } else {
                ResponseTemplate::new(204)
            }
        };
        (attempts, responder)
    }

    #[tokio::test]
    async fn returns_successful_response_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn retries_keyed_post_until_success() {
        let server = MockServer::start().await;
        let (attempts, responder) = flaky(2);
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({ "note": "retry me" })))
            .respond_with(responder)
            .expect(3)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let request = client
            .request(Method::POST, server.uri())
            .header(REQUEST_ID_HEADER, "3f1c2a9e-key")
            .json(&serde_json::json!({ "note": "retry me" }));
        let response = client.send(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn unkeyed_post_is_sent_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let response = client
            .send(client.request(Method::POST, server.uri()).body("{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn replayable_post_is_retried_without_key() {
        let server = MockServer::start().await;
        let (attempts, responder) = flaky(1);
        Mock::given(method("POST")).respond_with(responder).expect(2).mount(&server).await;

        let client = client_with_defaults();
        let response = client
            .send_replayable(client.request(Method::POST, server.uri()).body("grant"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn returns_last_server_error_when_attempts_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let client = HttpClient::builder()
            .base_backoff(Duration::from_millis(1))
            .max_attempts(2)
            .build()
            .expect("http client");
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn retries_on_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED
        let url = format!("http://{}", addr);

        let client = HttpClient::builder()
            .base_backoff(Duration::from_millis(5))
            .max_attempts(2)
            .build()
            .expect("http client");

        let result = client.send(client.request(Method::GET, &url)).await;
        match result {
            Err(PaypalError::Network(msg)) => {
                assert!(msg.to_lowercase().contains("http"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn backoff_doubles_per_retry() {
        let client = HttpClient::builder()
            .base_backoff(Duration::from_millis(100))
            .max_attempts(4)
            .build()
            .expect("http client");

        assert_eq!(client.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(client.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(client.backoff_delay(3), Duration::from_millis(400));
        assert_eq!(client.total_backoff(), Duration::from_millis(700));
    }

    #[test]
    fn single_attempt_has_no_backoff() {
        let client = HttpClient::builder().max_attempts(1).build().expect("http client");

        assert_eq!(client.total_backoff(), Duration::ZERO);
    }
}
