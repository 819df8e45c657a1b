//! # PayPal Agreements Domain
//!
//! Wire types and domain errors for the PayPal billing agreements client.
//!
//! This crate contains:
//! - Request/response types for the billing agreement endpoints
//! - Domain error types and Result definitions
//! - Client configuration structures
//! - API constants (base URLs, resource paths)
//!
//! ## Architecture
//! - No I/O; serde models only
//! - Only external dependencies allowed

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
