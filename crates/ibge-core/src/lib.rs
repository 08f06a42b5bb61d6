// crates/ibge-core/src/lib.rs

//! # ibge-core
//!
//! Immutable, in-memory index of Brazilian states (UFs) and municipalities,
//! keyed by IBGE codes, state abbreviations and legacy TOM codes.
//!
//! The index is built once at startup from a [`RecordSource`] and then only
//! read. Building checks that every city points at a loaded state and that
//! no unique key is duplicated; queries are O(1) map lookups that return
//! [`LookupError::NotFound`] or [`LookupError::InvalidArgument`] instead of
//! panicking.
//!
//! ```rust
//! use ibge_core::{IbgeLookup, Index, LookupService, VecSource};
//! # use ibge_core::{City, State};
//! # let sp = State { code: 35, name: "São Paulo".into(), abbreviation: "SP".into() };
//! # let cities = vec![City {
//! #     code: 3550308, name: "São Paulo".into(), legacy_code: Some(7107),
//! #     micro_region: None, immediate_region: None,
//! #     state_code: 35, state_abbreviation: "SP".into(), state_name: "São Paulo".into(),
//! # }];
//!
//! let source = VecSource::new(vec![sp], cities);
//! let lookup: LookupService = Index::from_source(&source)?.into();
//!
//! assert_eq!(lookup.cities_by_state_abbreviation("sp")?.len(), 1);
//! assert!(lookup.state_by_abbreviation("xx").unwrap_err().is_not_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod common;
pub mod error;
pub mod loader; // Record sources
pub mod model;
pub mod text;
pub mod traits;
// Fixture rows (used by the JSON loader)
#[cfg(feature = "json")]
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::error::{LoadError, LookupError, LookupResult, Result};
#[cfg(feature = "json")]
pub use crate::loader::JsonSource;
pub use crate::loader::VecSource;
pub use crate::model::{City, Index, LookupService, State};
pub use crate::traits::{CityRows, IbgeLookup, RecordSource};
