//! PayPal REST API client
//!
//! This module provides the shared authenticated client and the billing
//! agreement operations built on top of it.
//!
//! # Architecture
//!
//! - Uses the retrying [`crate::http::HttpClient`] (no direct reqwest)
//! - OAuth2 client-credentials authentication with token caching
//! - Status codes mapped to categorized [`ApiError`]s
//! - Resource operations are thin path/body builders over
//!   [`ApiClient::send_and_auth`]

pub mod auth;
pub mod billing_agreements;
pub mod client;
pub mod errors;

pub use auth::{AccessTokenProvider, ClientCredentialsAuth, StaticTokenProvider, TokenResponse};
pub use billing_agreements::BillingAgreements;
pub use client::{ApiClient, ApiClientBuilder};
pub use errors::{ApiError, ApiErrorCategory};
