// crates/ibge-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod search;

pub use flat::{City, Index, State};
pub use search::LookupService;
