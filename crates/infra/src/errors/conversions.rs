//! Conversions from external infrastructure errors into domain errors.

use paypal_agreements_domain::PaypalError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PaypalError);

impl From<InfraError> for PaypalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PaypalError> for InfraError {
    fn from(value: PaypalError) -> Self {
        InfraError(value)
    }
}

/// Mapping of a third-party error onto the domain error.
trait IntoPaypalError {
    fn into_paypal(self) -> PaypalError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PaypalError */
/* -------------------------------------------------------------------------- */

impl IntoPaypalError for HttpError {
    fn into_paypal(self) -> PaypalError {
        let url = self.url().map(|u| u.as_str().to_string()).unwrap_or_default();

        if self.is_timeout() {
            return PaypalError::Network(format!("http request to {url} timed out"));
        }

        if self.is_connect() {
            return PaypalError::Network(format!("http connection to {url} failed: {self}"));
        }

        if self.is_builder() {
            return PaypalError::InvalidInput(format!("invalid http request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return PaypalError::Serialization(format!("failed to read http body: {self}"));
        }

        PaypalError::Network(format!("http request failed: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_paypal())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PaypalError */
/* -------------------------------------------------------------------------- */

impl IntoPaypalError for JsonError {
    fn into_paypal(self) -> PaypalError {
        PaypalError::Serialization(format!(
            "json error at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_paypal())
    }
}
