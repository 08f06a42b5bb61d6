// crates/ibge-core/src/loader/mod.rs

//! # Record Sources
//!
//! Handles the Physical Layer (files, decompression) and turns the fixture
//! rows into [`State`](crate::State)/[`City`](crate::City) records for the
//! index builder. Nothing in here is touched after startup.

use std::path::PathBuf;

#[cfg(feature = "json")]
mod common_io;
#[cfg(feature = "json")]
mod json;
mod memory;

#[cfg(feature = "json")]
pub use json::{JsonSource, CITIES_FILE, TOM_FILE};
pub use memory::VecSource;

/// Directory holding the sample fixtures shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
