//! # PayPal Agreements Infrastructure
//!
//! HTTP client implementations for the PayPal billing agreements API.
//!
//! This crate contains:
//! - Retrying HTTP transport
//! - OAuth2 client-credentials authentication
//! - The shared authenticated API client and billing agreement operations
//! - Configuration loading
//!
//! ## Architecture
//! - Depends on `paypal-agreements-domain` for wire types and errors
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::*;
pub use http::*;
