pub mod demo;
pub mod envelope;
pub mod history;
pub mod hosted;
pub mod payment;

pub use demo::{
    CheckPaymentStatusData, CheckPaymentStatusRequest, Scenario, ScenarioCatalog,
    ScenarioSummary, ScenarioUsage, TestHostedPaymentData, TestHostedPaymentRequest,
    TestPaymentData, TestPaymentRequest,
};
pub use envelope::{ErrorBody, ResponseEnvelope};
pub use history::PaymentHistoryQuery;
pub use hosted::{HostedPaymentRequest, HostedSession, HostedSessionData};
pub use payment::{
    DirectPaymentData, DirectPaymentRequest, GatewayProvider, PaymentError,
    PaymentMethod, PaymentMethodType, PaymentResult, PaymentStatus, Receipt, ThreeDSecureInfo,
    ThreeDSecureSummary, ThreeDSecureType,
};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as an absent field.
///
/// Request bodies come from loosely typed callers that send `null` for
/// fields they have not filled in yet.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
