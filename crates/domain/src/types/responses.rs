//! Typed results of the billing agreement endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::agreement::{AgreementDetails, BillingAgreement};
use super::money::{find_link, Link};
use super::payer::Payer;
use super::plan::BillingPlan;
use crate::impl_domain_status_conversions;

/// Link relation holding the URL the payer must visit to approve
pub const APPROVAL_URL_REL: &str = "approval_url";

/// Created agreement echoed back with its approval/execute links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreateBillingAgreementResp {
    #[serde(flatten)]
    pub agreement: BillingAgreement,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl CreateBillingAgreementResp {
    /// URL the payer must visit to approve the agreement
    pub fn approval_url(&self) -> Option<&str> {
        find_link(&self.links, APPROVAL_URL_REL).map(|link| link.href.as_str())
    }
}

/// Agreement returned once the payer-approved token is executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExecuteBillingAgreementResp {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<BillingPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_details: Option<AgreementDetails>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Full agreement detail
///
/// `state` is kept exactly as PayPal reports it; use [`Self::parsed_state`]
/// for a typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GetBillingAgreementResp {
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "plan", default, skip_serializing_if = "Option::is_none")]
    pub billing_plan: Option<BillingPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_details: Option<AgreementDetails>,
}

impl GetBillingAgreementResp {
    /// Typed lifecycle state, `None` when PayPal reports a state this
    /// client does not know
    pub fn parsed_state(&self) -> Option<AgreementState> {
        self.state.parse().ok()
    }
}

/// Sequence of billing agreements
///
/// Older payloads carried the list under `plans`; both keys decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListBillingAgreementsResp {
    #[serde(rename = "agreements", alias = "plans", default)]
    pub billing_agreements: Vec<BillingAgreement>,
}

/// Agreement lifecycle states reported by PayPal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgreementState {
    Active,
    Pending,
    Expired,
    Suspended,
    Reactivated,
    Cancelled,
}

impl_domain_status_conversions!(AgreementState {
    Active => "Active",
    Pending => "Pending",
    Expired => "Expired",
    Suspended => "Suspended" | "Suspend",
    Reactivated => "Reactivated" | "Reactivate",
    Cancelled => "Cancelled" | "Cancel" | "Canceled",
});
