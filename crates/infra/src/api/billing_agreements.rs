//! Billing agreement operations
//!
//! One method per `/payments/billing-agreements` endpoint. Each builds the
//! path from the agreement id (or payment token), attaches the JSON body if
//! any, and sends it through the shared [`ApiClient`]. Nothing here retries;
//! agreement state transitions are owned by PayPal.

use std::sync::Arc;

use chrono::NaiveDate;
use paypal_agreements_domain::constants::{BILLING_AGREEMENTS_PATH, TRANSACTION_DATE_FORMAT};
use paypal_agreements_domain::{
    AgreementStateDescriptor, AgreementTransactions, BillingAgreement, CreateBillingAgreementResp,
    Currency, ExecuteBillingAgreementResp, GetBillingAgreementResp, PatchRequest,
};
use reqwest::Method;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Billing agreement commands bound to a shared client
#[derive(Clone)]
pub struct BillingAgreements {
    client: Arc<ApiClient>,
}

impl ApiClient {
    /// Billing agreement operations sharing this client
    pub fn billing_agreements(self: &Arc<Self>) -> BillingAgreements {
        BillingAgreements::new(Arc::clone(self))
    }
}

impl BillingAgreements {
    /// Operations bound to a shared client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create a billing agreement
    ///
    /// The response carries the `approval_url` link the payer must visit
    /// before the agreement can be executed.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, agreement), fields(plan_id = ?agreement.plan.id))]
    pub async fn create(
        &self,
        agreement: &BillingAgreement,
    ) -> Result<CreateBillingAgreementResp, ApiError> {
        let response: CreateBillingAgreementResp = self
            .client
            .send_and_auth(Method::POST, BILLING_AGREEMENTS_PATH, Some(agreement))
            .await?;

        debug!(links = response.links.len(), "Billing agreement created");
        Ok(response)
    }

    /// Execute an agreement the payer has approved
    ///
    /// # Arguments
    ///
    /// * `token` - Payment token from the approval redirect
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty token, or an error if
    /// the API request fails
    #[instrument(skip(self))]
    pub async fn execute(&self, token: &str) -> Result<ExecuteBillingAgreementResp, ApiError> {
        let path = agreement_path(token, Some("agreement-execute"))?;
        let response: ExecuteBillingAgreementResp =
            self.client.send_and_auth::<(), _>(Method::POST, &path, None).await?;

        debug!(agreement_id = %response.id, "Billing agreement executed");
        Ok(response)
    }

    /// Fetch an agreement with its state and financial summary
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<GetBillingAgreementResp, ApiError> {
        let path = agreement_path(id, None)?;
        self.client.send_and_auth::<(), _>(Method::GET, &path, None).await
    }

    /// Apply JSON-patch operations to an agreement
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, patch), fields(operations = patch.len()))]
    pub async fn update(&self, id: &str, patch: &[PatchRequest]) -> Result<(), ApiError> {
        let path = agreement_path(id, None)?;
        self.client.send_and_auth_empty(Method::PATCH, &path, Some(patch)).await
    }

    /// Suspend an active agreement
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, descriptor))]
    pub async fn suspend(
        &self,
        id: &str,
        descriptor: &AgreementStateDescriptor,
    ) -> Result<(), ApiError> {
        self.post_action(id, "suspend", descriptor).await
    }

    /// Cancel an agreement
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, descriptor))]
    pub async fn cancel(
        &self,
        id: &str,
        descriptor: &AgreementStateDescriptor,
    ) -> Result<(), ApiError> {
        self.post_action(id, "cancel", descriptor).await
    }

    /// Re-activate a suspended agreement
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, descriptor))]
    pub async fn reactivate(
        &self,
        id: &str,
        descriptor: &AgreementStateDescriptor,
    ) -> Result<(), ApiError> {
        self.post_action(id, "re-activate", descriptor).await
    }

    /// Bill the outstanding balance of an agreement
    ///
    /// Set `descriptor.amount` to bill less than the full balance.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, descriptor))]
    pub async fn bill_balance(
        &self,
        id: &str,
        descriptor: &AgreementStateDescriptor,
    ) -> Result<(), ApiError> {
        self.post_action(id, "bill-balance", descriptor).await
    }

    /// Set the outstanding balance of an agreement
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id, or an error if the
    /// API request fails
    #[instrument(skip(self, amount), fields(currency = %amount.currency))]
    pub async fn set_balance(&self, id: &str, amount: &Currency) -> Result<(), ApiError> {
        self.post_action(id, "set-balance", amount).await
    }

    /// List transactions recorded against an agreement between two dates
    /// (inclusive)
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an empty id or when `start_date`
    /// is after `end_date`, or an error if the API request fails
    #[instrument(
        skip(self, start_date, end_date),
        fields(start = %start_date, end = %end_date)
    )]
    pub async fn list_transactions(
        &self,
        id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AgreementTransactions, ApiError> {
        if start_date > end_date {
            return Err(ApiError::InvalidInput(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }

        let path = format!(
            "{}?start_date={}&end_date={}",
            agreement_path(id, Some("transactions"))?,
            start_date.format(TRANSACTION_DATE_FORMAT),
            end_date.format(TRANSACTION_DATE_FORMAT)
        );
        let response: AgreementTransactions =
            self.client.send_and_auth::<(), _>(Method::GET, &path, None).await?;

        debug!(count = response.agreement_transaction_list.len(), "Agreement transactions listed");
        Ok(response)
    }

    async fn post_action<B>(&self, id: &str, action: &str, body: &B) -> Result<(), ApiError>
    where
        B: serde::Serialize + ?Sized,
    {
        let path = agreement_path(id, Some(action))?;
        self.client.send_and_auth_empty(Method::POST, &path, Some(body)).await
    }
}

/// Build `/payments/billing-agreements/{id}[/{action}]`
fn agreement_path(id: &str, action: Option<&str>) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::InvalidInput("agreement id or token must not be empty".to_string()));
    }

    let mut path = format!("{}/{}", BILLING_AGREEMENTS_PATH, encode(id));
    if let Some(action) = action {
        path.push('/');
        path.push_str(action);
    }
    Ok(path)
}
