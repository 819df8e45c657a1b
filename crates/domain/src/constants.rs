//! PayPal API constants
//!
//! Base URLs and resource paths shared by the infrastructure layer.

// API base URLs
pub const API_BASE_SANDBOX: &str = "https://api.sandbox.paypal.com/v1";
pub const API_BASE_LIVE: &str = "https://api.paypal.com/v1";

// Resource paths (appended to the API base)
pub const OAUTH_TOKEN_PATH: &str = "/oauth2/token";
pub const BILLING_AGREEMENTS_PATH: &str = "/payments/billing-agreements";

/// Idempotency key header; PayPal answers a repeated key with the original
/// result instead of performing the operation again
pub const REQUEST_ID_HEADER: &str = "PayPal-Request-Id";

// Client defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
pub const TOKEN_EXPIRY_SKEW_SECS: u64 = 60;

/// Date format PayPal expects for transaction search bounds
pub const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d";
