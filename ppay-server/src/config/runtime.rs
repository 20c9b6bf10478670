//! Runtime configuration re-exports.
//!
//! The validated config types live in `ppay-core::config`; this module
//! re-exports them for the server.

pub use ppay_core::config::{ServerConfig, SharedConfig, UpstreamConfig};
