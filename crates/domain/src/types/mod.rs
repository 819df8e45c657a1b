//! Wire types for the billing agreements API
//!
//! Field names follow PayPal's JSON exactly; optional fields are omitted from
//! request bodies when unset.

pub mod agreement;
pub mod error_response;
pub mod money;
pub mod patch;
pub mod payer;
pub mod plan;
pub mod responses;
pub mod transaction;

pub use agreement::{
    AgreementDetails, AgreementStateDescriptor, BillingAgreement, OverrideChargeModel,
};
pub use error_response::{ErrorDetail, ErrorResponse};
pub use money::{find_link, Currency, Link};
pub use patch::{PatchOperation, PatchRequest};
pub use payer::{Payer, PayerInfo, ShippingAddress, PAYMENT_METHOD_PAYPAL};
pub use plan::{BillingPlan, ChargeModel, MerchantPreferences, PaymentDefinition};
pub use responses::{
    AgreementState, CreateBillingAgreementResp, ExecuteBillingAgreementResp,
    GetBillingAgreementResp, ListBillingAgreementsResp, APPROVAL_URL_REL,
};
pub use transaction::{AgreementTransaction, AgreementTransactions};
