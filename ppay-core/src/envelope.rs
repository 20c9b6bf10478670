//! Reshaping of upstream responses into partner-facing payloads.

use ppay_sdk::objects::{
    DirectPaymentData, HostedSession, HostedSessionData, PaymentResult, PaymentStatus,
    ThreeDSecureSummary,
};

/// Partner view of a direct payment result.
///
/// 3D Secure details are exposed only when the payment is waiting for
/// authentication and the upstream supplied a challenge; every other
/// result reports `threeDSecure.required == false`.
pub fn direct_payment_data(result: &PaymentResult) -> DirectPaymentData {
    let three_d_secure = match (&result.status, &result.three_d_secure) {
        (PaymentStatus::RequiresAction, Some(info)) => ThreeDSecureSummary {
            required: true,
            kind: info.kind.clone(),
            authentication_url: info.url.clone(),
            client_secret: info.client_secret.clone(),
        },
        _ => ThreeDSecureSummary::default(),
    };

    DirectPaymentData {
        payment_intent_id: result.payment_intent_id.clone(),
        status: result.status.clone(),
        gateway: result.gateway.clone(),
        three_d_secure,
        order: result.order.clone(),
        error: result.error.clone(),
    }
}

/// Partner view of a freshly created hosted session.
pub fn hosted_session_data(session: HostedSession) -> HostedSessionData {
    HostedSessionData {
        session_id: session.session_id,
        url: session.checkout_url,
        order: session.order,
    }
}
