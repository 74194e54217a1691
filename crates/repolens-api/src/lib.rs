#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultApiClient is meant to be used through the ProfileApiPort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultApiClient;

// Configuration
pub use config::{ApiClientConfig, DEFAULT_BASE_URL};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
