//! Example: Driving a billing agreement through its lifecycle
//!
//! Loads credentials with the standard configuration loader, creates an
//! agreement and prints the approval URL. When an approval token or an
//! existing agreement id is supplied it continues with execute, inspection
//! and a suspend/re-activate round trip.
//!
//! # Setup
//!
//! 1. Export sandbox credentials (or put them in `.env`):
//!    `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`
//!
//! 2. Run this example:
//!    `cargo run --example agreement_lifecycle -- P-PLANID [EC-TOKEN | I-AGREEMENT]`

use std::sync::Arc;

use chrono::{Duration, Utc};
use paypal_agreements_domain::{AgreementStateDescriptor, BillingAgreement};
use paypal_agreements_infra::{config, ApiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let plan_id = args.next().ok_or("usage: agreement_lifecycle <plan-id> [token | agreement-id]")?;
    let follow_up = args.next();

    let client = Arc::new(ApiClient::with_client_credentials(config::load()?)?);
    let agreements = client.billing_agreements();

    let agreement = BillingAgreement::new(
        "Example membership",
        "Created by the agreement_lifecycle example",
        plan_id,
        Utc::now() + Duration::days(1),
    );

    let created = agreements.create(&agreement).await?;
    match created.approval_url() {
        Some(url) => println!("Approve the agreement at: {}", url),
        None => println!("No approval_url link returned"),
    }

    let Some(reference) = follow_up else {
        return Ok(());
    };

    let agreement_id = if reference.starts_with("EC-") {
        let executed = agreements.execute(&reference).await?;
        println!("Executed agreement {}", executed.id);
        executed.id
    } else {
        reference
    };

    let fetched = agreements.get(&agreement_id).await?;
    println!("Agreement {} is {}", fetched.id, fetched.state);
    if let Some(details) = &fetched.agreement_details {
        println!("  cycles completed: {:?}", details.cycles_completed);
        println!("  next billing date: {:?}", details.next_billing_date);
    }

    agreements
        .suspend(&agreement_id, &AgreementStateDescriptor::with_note("Paused by example"))
        .await?;
    agreements
        .reactivate(&agreement_id, &AgreementStateDescriptor::with_note("Resumed by example"))
        .await?;
    println!("Suspended and re-activated {}", agreement_id);

    Ok(())
}
