//! Money amounts and hypermedia links shared by every resource

use serde::{Deserialize, Serialize};

/// Monetary amount as PayPal encodes it
///
/// `value` is kept as the decimal string PayPal sends (e.g. `"10.00"`) so no
/// precision is lost between the wire and the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Currency {
    /// ISO-4217 currency code
    pub currency: String,
    /// Decimal amount
    pub value: String,
}

impl Currency {
    /// Amount in `currency`, with `value` as a decimal string
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self { currency: currency.into(), value: value.into() }
    }
}

/// Hypermedia link returned alongside a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enctype: Option<String>,
}

/// Find the first link with the given relation
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.rel.eq_ignore_ascii_case(rel))
}
