use serde::Serialize;

/// Simple aggregate statistics for a built index.
///
/// Returned by [`Index::stats`](crate::Index::stats); the counts reflect the
/// materialized in-memory index, after every invariant has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub states: usize,
    pub cities: usize,
    /// Cities that also answer to a legacy (TOM) code.
    pub cities_with_legacy_code: usize,
    pub states_without_cities: usize,
}
