// crates/ibge-core/src/model/search.rs
use crate::common::IndexStats;
use crate::error::{LookupError, LookupResult};
use crate::model::flat::{City, Index, Slot, State};
use crate::text::{fold_abbreviation, parse_code};
use crate::traits::IbgeLookup;
use std::ops::Range;
use std::sync::Arc;

const STATE: &str = "estado";
const CITY: &str = "cidade";

impl Index {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            states: self.states.len(),
            cities: self.cities.len(),
            cities_with_legacy_code: self.city_by_legacy_code.len(),
            states_without_cities: self
                .cities_by_state_code
                .values()
                .filter(|r| r.is_empty())
                .count(),
        }
    }

    pub fn all_states(&self) -> &[State] {
        &self.states
    }

    pub fn state_by_abbreviation(&self, code: &str) -> LookupResult<&State> {
        self.state_by_abbreviation
            .get(&fold_abbreviation(code))
            .map(|&slot| self.state_at(slot))
            .ok_or_else(|| LookupError::not_found(STATE, code))
    }

    pub fn state_by_numeric_code(&self, code: &str) -> LookupResult<&State> {
        let key = parse_code(code, "codigo_ibge", STATE)?;
        self.state_by_code
            .get(&key)
            .map(|&slot| self.state_at(slot))
            .ok_or_else(|| LookupError::not_found(STATE, code))
    }

    pub fn cities_by_state_abbreviation(&self, code: &str) -> LookupResult<&[City]> {
        self.cities_by_abbreviation
            .get(&fold_abbreviation(code))
            .map(|range| self.cities_in(range))
            .ok_or_else(|| LookupError::not_found(STATE, code))
    }

    pub fn cities_by_state_numeric_code(&self, code: &str) -> LookupResult<&[City]> {
        let key = parse_code(code, "codigo_ibge", STATE)?;
        self.cities_by_state_code
            .get(&key)
            .map(|range| self.cities_in(range))
            .ok_or_else(|| LookupError::not_found(STATE, code))
    }

    pub fn city_by_numeric_code(&self, code: &str) -> LookupResult<&City> {
        let key = parse_code(code, "codigo_ibge", CITY)?;
        self.city_by_code
            .get(&key)
            .map(|&slot| self.city_at(slot))
            .ok_or_else(|| LookupError::not_found(CITY, code))
    }

    pub fn city_by_legacy_code(&self, code: &str) -> LookupResult<&City> {
        let key = parse_code(code, "codigo_tom", CITY)?;
        self.city_by_legacy_code
            .get(&key)
            .map(|&slot| self.city_at(slot))
            .ok_or_else(|| LookupError::not_found(CITY, code))
    }

    // Slots and ranges are produced by the builder from the same vectors,
    // so direct indexing cannot go out of bounds.
    #[inline]
    fn state_at(&self, slot: Slot) -> &State {
        &self.states[slot as usize]
    }

    #[inline]
    fn city_at(&self, slot: Slot) -> &City {
        &self.cities[slot as usize]
    }

    #[inline]
    fn cities_in(&self, range: &Range<Slot>) -> &[City] {
        &self.cities[range.start as usize..range.end as usize]
    }
}

impl IbgeLookup for Index {
    fn index(&self) -> &Index {
        self
    }
}

/// Read-only handle to a built [`Index`], cheap to clone.
///
/// This is what the composition point hands to adapters (HTTP handlers, the
/// CLI). Every clone points at the same immutable index.
#[derive(Clone, Debug)]
pub struct LookupService {
    index: Arc<Index>,
}

impl LookupService {
    pub fn new(index: Arc<Index>) -> Self {
        LookupService { index }
    }

    /// The shared index, e.g. to hand it to another service.
    pub fn shared_index(&self) -> Arc<Index> {
        Arc::clone(&self.index)
    }
}

impl From<Index> for LookupService {
    fn from(index: Index) -> Self {
        LookupService::new(Arc::new(index))
    }
}

impl IbgeLookup for LookupService {
    fn index(&self) -> &Index {
        &self.index
    }
}
