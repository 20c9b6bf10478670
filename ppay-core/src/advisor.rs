//! Next-step guidance derived from payment state.
//!
//! Pure functions: given what the upstream reported, produce the ordered,
//! human-readable list of things a partner integration should do next.

use ppay_sdk::objects::{HostedSessionData, PaymentResult, PaymentStatus};

/// Path partners poll for the status of a direct payment.
pub fn direct_status_path(payment_intent_id: &str) -> String {
    format!("/api/v1/payments/direct/status/{payment_intent_id}")
}

/// Path partners poll for the status of a hosted session.
pub fn hosted_session_path(session_id: &str) -> String {
    format!("/api/v1/payments/hosted/session/{session_id}")
}

/// Suggested next steps for a payment result.
///
/// Always returns at least one line. Conditional lines (receipt, 3D Secure
/// URL, error message) appear only when the corresponding field is set.
pub fn next_steps(result: &PaymentResult) -> Vec<String> {
    let mut steps = Vec::new();

    match &result.status {
        PaymentStatus::Succeeded => {
            steps.push("Payment completed successfully".to_owned());
            steps.push("Mark the order as paid and send confirmation to the customer".to_owned());
            if let Some(url) = result.receipt.as_ref().and_then(|r| r.receipt_url.as_deref()) {
                steps.push(format!("View receipt: {url}"));
            }
        }
        PaymentStatus::RequiresAction => {
            steps.push("3D Secure authentication required".to_owned());
            match result.three_d_secure.as_ref().and_then(|t| t.url.as_deref()) {
                Some(url) => steps.push(format!("Redirect customer to: {url}")),
                None => steps.push(
                    "Redirect customer to the authentication page provided by the gateway"
                        .to_owned(),
                ),
            }
            steps.push(format!(
                "After authentication, check payment status again: GET {}",
                direct_status_path(&result.payment_intent_id)
            ));
        }
        PaymentStatus::Failed => {
            steps.push("Payment failed".to_owned());
            steps.push("Allow customer to try a different payment method".to_owned());
            if let Some(message) = result.error.as_ref().and_then(|e| e.message.as_deref()) {
                steps.push(format!("Error: {message}"));
            }
        }
        PaymentStatus::Processing => {
            steps.push("Payment is being processed".to_owned());
            steps.push(format!(
                "Check status again in a few seconds: GET {}",
                direct_status_path(&result.payment_intent_id)
            ));
        }
        PaymentStatus::RequiresPaymentMethod
        | PaymentStatus::Canceled
        | PaymentStatus::Other(_) => {
            steps.push(format!("Payment status: {}", result.status));
        }
    }

    steps
}

/// Suggested next steps after a hosted checkout session was created.
pub fn hosted_session_steps(session: &HostedSessionData) -> Vec<String> {
    vec![
        "Redirect customer to the hosted checkout page".to_owned(),
        format!("Open: {}", session.url),
        "Customer completes payment on the gateway's secure page".to_owned(),
        format!(
            "After payment, check session status: GET {}",
            hosted_session_path(&session.session_id)
        ),
    ]
}
