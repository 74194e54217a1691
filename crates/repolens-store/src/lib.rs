#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod file;
mod memory;

pub use file::JsonFileFavoritesStore;
pub use memory::InMemoryFavoritesStore;

#[cfg(test)]
use tempfile as _;
