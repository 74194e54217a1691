//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<T>`,
//!   `async` when the command talks to the backend. `favorite` and
//!   `favorites` only touch local state and stay synchronous.
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Drive the core `Dashboard` (or a single core service)
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain listing or favorites rules; those live in
//! `repolens-core`.

pub mod analyze;
pub mod browse;
pub mod favorite;
pub mod favorites;
pub mod list;
pub mod remove;
pub mod topics;
