// crates/ibge-core/src/model/convert.rs
use crate::error::{LoadError, Result};
use crate::model::flat::{City, Index, Slot, State};
use crate::text::fold_abbreviation;
use crate::traits::{CityRows, RecordSource};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

impl Index {
    /// **Index Builder:** fetches everything from `source` once and builds.
    ///
    /// On top of [`Index::build`], this checks that the source's own
    /// grouping of cities by state agrees with the grouping derived here.
    pub fn from_source<S: RecordSource + ?Sized>(source: &S) -> Result<Self> {
        let states = source.fetch_states()?;
        let CityRows { cities, by_state } = source.fetch_cities()?;
        debug!(
            states = states.len(),
            cities = cities.len(),
            "fetched records from source"
        );

        let index = Self::build(states, cities)?;
        index.check_grouping(&by_state)?;
        Ok(index)
    }

    /// Builds every lookup table from the full record set.
    ///
    /// Fails on an empty state list, on duplicate unique keys (state
    /// abbreviation, state code, city code, legacy code), and on any city
    /// whose state reference does not resolve. A state without cities is
    /// fine and gets an empty listing.
    pub fn build(states: Vec<State>, cities: Vec<City>) -> Result<Self> {
        if states.is_empty() {
            return Err(LoadError::NoStates);
        }

        // 1. States + the two state maps
        let mut state_by_abbreviation: HashMap<String, Slot> = HashMap::with_capacity(states.len());
        let mut state_by_code: HashMap<u32, Slot> = HashMap::with_capacity(states.len());

        for (slot, state) in states.iter().enumerate() {
            let slot = slot as Slot;
            match state_by_abbreviation.entry(fold_abbreviation(&state.abbreviation)) {
                Entry::Occupied(e) => {
                    return Err(LoadError::DuplicateStateAbbreviation {
                        abbreviation: e.key().clone(),
                        first: states[*e.get() as usize].code,
                        second: state.code,
                    });
                }
                Entry::Vacant(e) => {
                    e.insert(slot);
                }
            }
            if state_by_code.insert(state.code, slot).is_some() {
                return Err(LoadError::DuplicateStateCode(state.code));
            }
        }

        // 2. Bucket cities per state slot, keeping source order inside a bucket
        let mut buckets: Vec<Vec<City>> = vec![Vec::new(); states.len()];
        for city in cities {
            let slot = *state_by_code
                .get(&city.state_code)
                .ok_or(LoadError::UnknownState {
                    city: city.code,
                    state_code: city.state_code,
                })?;
            let owner = &states[slot as usize];
            if fold_abbreviation(&city.state_abbreviation) != fold_abbreviation(&owner.abbreviation) {
                return Err(LoadError::StateMismatch {
                    city: city.code,
                    state_code: city.state_code,
                    expected: owner.abbreviation.clone(),
                    found: city.state_abbreviation.clone(),
                });
            }
            buckets[slot as usize].push(city);
        }

        // 3. Flatten buckets into the master vector; one range per state
        let total: usize = buckets.iter().map(Vec::len).sum();
        let mut flat: Vec<City> = Vec::with_capacity(total);
        let mut cities_by_abbreviation = HashMap::with_capacity(states.len());
        for (state, bucket) in states.iter().zip(buckets) {
            let start = flat.len() as Slot;
            flat.extend(bucket);
            cities_by_abbreviation.insert(
                fold_abbreviation(&state.abbreviation),
                start..(flat.len() as Slot),
            );
        }

        // 4. By-code listing is derived from the by-abbreviation one
        let cities_by_state_code = states
            .iter()
            .map(|state| {
                let range = cities_by_abbreviation[&fold_abbreviation(&state.abbreviation)].clone();
                (state.code, range)
            })
            .collect::<HashMap<_, _>>();

        // 5. City maps
        let mut city_by_code: HashMap<u32, Slot> = HashMap::with_capacity(flat.len());
        let mut city_by_legacy_code: HashMap<u32, Slot> = HashMap::new();
        for (slot, city) in flat.iter().enumerate() {
            let slot = slot as Slot;
            if city_by_code.insert(city.code, slot).is_some() {
                return Err(LoadError::DuplicateCityCode(city.code));
            }
            if let Some(legacy) = city.legacy_code {
                if let Some(prev) = city_by_legacy_code.insert(legacy, slot) {
                    return Err(LoadError::DuplicateLegacyCode {
                        legacy_code: legacy,
                        first: flat[prev as usize].code,
                        second: city.code,
                    });
                }
            }
        }

        let index = Index {
            states,
            cities: flat,
            state_by_abbreviation,
            state_by_code,
            cities_by_abbreviation,
            cities_by_state_code,
            city_by_code,
            city_by_legacy_code,
        };

        let stats = index.stats();
        info!(
            states = stats.states,
            cities = stats.cities,
            legacy_codes = stats.cities_with_legacy_code,
            empty_states = stats.states_without_cities,
            "index built"
        );
        Ok(index)
    }

    /// Compares a precomputed grouping (abbreviation -> city codes) with the
    /// listings this index derived itself.
    fn check_grouping(&self, by_state: &HashMap<String, Vec<u32>>) -> Result<()> {
        for (abbreviation, codes) in by_state {
            let key = fold_abbreviation(abbreviation);
            let range = self
                .cities_by_abbreviation
                .get(&key)
                .ok_or_else(|| LoadError::GroupingMismatch {
                    abbreviation: key.clone(),
                })?;
            let derived = &self.cities[range.start as usize..range.end as usize];
            if !derived.iter().map(|c| c.code).eq(codes.iter().copied()) {
                return Err(LoadError::GroupingMismatch { abbreviation: key });
            }
        }

        // States the source left out of its grouping must really be empty.
        let listed: HashSet<String> = by_state.keys().map(|k| fold_abbreviation(k)).collect();
        for (abbreviation, range) in &self.cities_by_abbreviation {
            if !listed.contains(abbreviation) && !range.is_empty() {
                return Err(LoadError::GroupingMismatch {
                    abbreviation: abbreviation.clone(),
                });
            }
        }
        Ok(())
    }
}
