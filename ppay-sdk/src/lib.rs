//! Wire types and HTTP client for the partner payment integration API.
//!
//! The types in [`objects`] are shared by the server and by any Rust
//! caller of the API. The typed client lives in [`client`] and is gated
//! behind the `client` feature.

#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
