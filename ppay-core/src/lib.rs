#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod advisor;
pub mod config;
pub mod envelope;
pub mod error;
pub mod framework;
pub mod gateway;
pub mod operations;
pub mod scenarios;
