// crates/ibge-core/src/loader/memory.rs
use crate::error::Result;
use crate::model::{City, State};
use crate::traits::{CityRows, RecordSource};

/// A [`RecordSource`] over rows that are already in memory.
///
/// Handy for tests, benchmarks and embedders that fetched the rows
/// themselves. The grouping is derived from the city list on every fetch.
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    states: Vec<State>,
    cities: Vec<City>,
}

impl VecSource {
    pub fn new(states: Vec<State>, cities: Vec<City>) -> Self {
        VecSource { states, cities }
    }
}

impl RecordSource for VecSource {
    fn fetch_states(&self) -> Result<Vec<State>> {
        Ok(self.states.clone())
    }

    fn fetch_cities(&self) -> Result<CityRows> {
        Ok(CityRows::from_cities(self.cities.clone()))
    }
}
