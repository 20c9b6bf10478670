//! Typed upstream operations.
//!
//! Each operation is an input struct with a `Processor` implementation on
//! [`GatewayProcessor`](crate::framework::GatewayProcessor) that issues
//! exactly one upstream call.

pub mod direct;
pub mod history;
pub mod hosted;

pub use direct::{GetDirectPaymentStatus, ProcessDirectPayment};
pub use history::ListPaymentHistory;
pub use hosted::{CreateHostedSession, GetHostedSession};
