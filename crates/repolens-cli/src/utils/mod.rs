//! Terminal utilities.

pub mod input;
