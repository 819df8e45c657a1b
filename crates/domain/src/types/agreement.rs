//! Billing agreement request payloads and financial summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use super::money::Currency;
use super::payer::{Payer, ShippingAddress};
use super::plan::{BillingPlan, MerchantPreferences};

/// Billing agreement sent to PayPal when creating a subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BillingAgreement {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub plan: BillingPlan,
    #[serde(default)]
    pub payer: Payer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_merchant_preferences: Option<MerchantPreferences>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_charge_models: Vec<OverrideChargeModel>,
}

impl BillingAgreement {
    /// Agreement for a PayPal wallet payer on the given plan
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        plan_id: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date: Some(start_date),
            plan: BillingPlan::with_id(plan_id),
            payer: Payer::paypal(),
            ..Default::default()
        }
    }
}

/// Replaces the amount of one of the plan's charge models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OverrideChargeModel {
    pub charge_id: String,
    pub amount: Currency,
}

/// Financial summary of an agreement
///
/// PayPal encodes the cycle and failure counters as JSON strings.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgreementDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outstanding_balance: Option<Currency>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles_remaining: Option<u32>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles_completed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_payment_date: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_payment_count: Option<u32>,
}

/// Note (and optional amount) accompanying a state change or balance action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AgreementStateDescriptor {
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}

impl AgreementStateDescriptor {
    /// Descriptor carrying only a note
    pub fn with_note(note: impl Into<String>) -> Self {
        Self { note: note.into(), amount: None }
    }

    /// Descriptor used to bill an outstanding balance
    pub fn with_amount(note: impl Into<String>, amount: Currency) -> Self {
        Self { note: note.into(), amount: Some(amount) }
    }
}
