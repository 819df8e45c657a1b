#![allow(dead_code)]

use std::sync::Arc;

use paypal_agreements_domain::ClientConfig;
use paypal_agreements_infra::ApiClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client configuration pointing at the mock server with a single attempt
pub fn config_for(server: &MockServer) -> ClientConfig {
    let mut config =
        ClientConfig::new("client-id", "client-secret").with_api_base(format!("{}/v1", server.uri()));
    config.max_attempts = 1;
    config.timeout_secs = 5;
    config
}

/// Mount the OAuth2 token endpoint on the mock server
pub async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scope": "https://uri.paypal.com/services/subscriptions",
            "access_token": token,
            "token_type": "Bearer",
            "app_id": "APP-80W284485P519543T",
            "expires_in": 32400
        })))
        .mount(server)
        .await;
}

/// Shared client using client-credentials auth against the mock server
pub async fn client_for(server: &MockServer) -> Arc<ApiClient> {
    mount_token(server, "A21AAFake").await;
    Arc::new(
        ApiClient::with_client_credentials(config_for(server)).expect("client should build"),
    )
}

pub fn agreement_fixture(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "state": state,
        "description": "Monthly membership",
        "start_date": "2026-11-01T00:00:00Z",
        "payer": {
            "payment_method": "paypal",
            "payer_info": {
                "email": "buyer@example.com",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "payer_id": "QW7YVBH3EPGPE"
            }
        },
        "plan": {
            "payment_definitions": [{
                "type": "REGULAR",
                "frequency": "Month",
                "amount": { "currency": "USD", "value": "10.00" },
                "cycles": "12",
                "frequency_interval": "1"
            }]
        },
        "links": [{
            "href": format!("https://api.sandbox.paypal.com/v1/payments/billing-agreements/{}", id),
            "rel": "self",
            "method": "GET"
        }],
        "agreement_details": {
            "outstanding_balance": { "currency": "USD", "value": "0.00" },
            "cycles_remaining": "11",
            "cycles_completed": "1",
            "next_billing_date": "2026-12-01T10:00:00Z",
            "failed_payment_count": "0"
        }
    })
}
