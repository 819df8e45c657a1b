//! Billing plan snapshot embedded in agreements

use serde::{Deserialize, Serialize};

use super::money::Currency;

/// Billing plan reference or snapshot
///
/// When creating an agreement only `id` is required; PayPal echoes a fuller
/// snapshot (payment definitions, merchant preferences) when fetching one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BillingPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_definitions: Vec<PaymentDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_preferences: Option<MerchantPreferences>,
}

impl BillingPlan {
    /// Plan reference carrying only the plan id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Default::default() }
    }
}

/// Payment definition (trial or regular) inside a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub definition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charge_models: Vec<ChargeModel>,
}

/// Shipping or tax charge attached to a payment definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChargeModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub model_type: String,
    pub amount: Currency,
}

/// Merchant preferences, also used to override a plan's preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MerchantPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_bill_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_fail_amount_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fail_attempts: Option<String>,
}
