//! Agreement transaction history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Currency;

/// Transactions recorded against an agreement in a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgreementTransactions {
    #[serde(default)]
    pub agreement_transaction_list: Vec<AgreementTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgreementTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_list_decodes() {
        let transactions: AgreementTransactions = serde_json::from_str(
            r#"{
                "agreement_transaction_list": [
                    {
                        "transaction_id": "I-0LN988D3JACS",
                        "status": "Created",
                        "transaction_type": "Recurring Payment",
                        "payer_email": "",
                        "payer_name": " ",
                        "time_stamp": "2026-06-09T09:29:36Z",
                        "time_zone": "GMT"
                    },
                    {
                        "transaction_id": "928415314Y5640008",
                        "status": "Completed",
                        "transaction_type": "Recurring Payment",
                        "amount": { "currency": "USD", "value": "1.00" },
                        "fee_amount": { "currency": "USD", "value": "-0.33" },
                        "net_amount": { "currency": "USD", "value": "0.67" },
                        "time_stamp": "2026-06-09T09:42:47Z",
                        "time_zone": "GMT"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(transactions.agreement_transaction_list.len(), 2);
        let completed = &transactions.agreement_transaction_list[1];
        assert_eq!(completed.status.as_deref(), Some("Completed"));
        assert_eq!(completed.net_amount, Some(Currency::new("USD", "0.67")));
        assert!(transactions.agreement_transaction_list[0].amount.is_none());
    }

    #[test]
    fn test_empty_body_decodes_to_empty_list() {
        let transactions: AgreementTransactions = serde_json::from_str("{}").unwrap();
        assert!(transactions.agreement_transaction_list.is_empty());
    }
}
