#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Only used by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
