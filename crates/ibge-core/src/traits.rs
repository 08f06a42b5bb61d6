// crates/ibge-core/src/traits.rs
use crate::common::IndexStats;
use crate::error::{LookupResult, Result};
use crate::model::{City, Index, State};
use crate::text::is_numeric;
use std::collections::HashMap;

/// Everything a source knows about cities, fetched in one call.
#[derive(Clone, Debug, Default)]
pub struct CityRows {
    /// Every city, in source order.
    pub cities: Vec<City>,
    /// The source's own grouping: upper-cased state abbreviation -> city
    /// codes in source order. Checked against the builder's grouping.
    pub by_state: HashMap<String, Vec<u32>>,
}

impl CityRows {
    /// Wraps a city list and derives the grouping from it.
    pub fn from_cities(cities: Vec<City>) -> Self {
        let mut by_state: HashMap<String, Vec<u32>> = HashMap::new();
        for city in &cities {
            by_state
                .entry(crate::text::fold_abbreviation(&city.state_abbreviation))
                .or_default()
                .push(city.code);
        }
        CityRows { cities, by_state }
    }
}

/// The data provider consumed once at startup.
///
/// Both calls return a complete snapshot; there is no pagination and no
/// streaming. Any error aborts startup.
pub trait RecordSource {
    fn fetch_states(&self) -> Result<Vec<State>>;
    fn fetch_cities(&self) -> Result<CityRows>;
}

/// The read side of the index.
///
/// Implementors only provide [`IbgeLookup::index`]; every query is a
/// provided method running against the prebuilt maps in O(1) expected time.
/// Queries never mutate anything and never block.
///
/// # Example
///
/// ```rust
/// use ibge_core::{City, IbgeLookup, Index, State};
///
/// let states = vec![State { code: 35, name: "São Paulo".into(), abbreviation: "SP".into() }];
/// let cities = vec![City {
///     code: 3550308,
///     name: "São Paulo".into(),
///     legacy_code: Some(7107),
///     micro_region: None,
///     immediate_region: None,
///     state_code: 35,
///     state_abbreviation: "SP".into(),
///     state_name: "São Paulo".into(),
/// }];
/// let index = Index::build(states, cities).unwrap();
///
/// assert_eq!(index.state_by_abbreviation("sp").unwrap().code, 35);
/// assert_eq!(index.city_by_legacy_code("7107").unwrap().code, 3550308);
/// assert!(index.state_by_numeric_code("abc").unwrap_err().is_invalid_argument());
/// ```
pub trait IbgeLookup {
    /// The index the queries run against.
    fn index(&self) -> &Index;

    fn stats(&self) -> IndexStats {
        self.index().stats()
    }

    /// All states in load order. Always succeeds.
    fn all_states(&self) -> &[State] {
        self.index().all_states()
    }

    /// Case-insensitive lookup by abbreviation ("sp", "SP").
    fn state_by_abbreviation(&self, code: &str) -> LookupResult<&State> {
        self.index().state_by_abbreviation(code)
    }

    /// Lookup by IBGE state code given as a string ("35").
    fn state_by_numeric_code(&self, code: &str) -> LookupResult<&State> {
        self.index().state_by_numeric_code(code)
    }

    /// Cities of a state, by abbreviation. A known state without cities
    /// yields an empty slice; an unknown one is `NotFound`.
    fn cities_by_state_abbreviation(&self, code: &str) -> LookupResult<&[City]> {
        self.index().cities_by_state_abbreviation(code)
    }

    /// Cities of a state, by IBGE state code. Same contract as the
    /// abbreviation variant, plus `InvalidArgument` on non-numeric input.
    fn cities_by_state_numeric_code(&self, code: &str) -> LookupResult<&[City]> {
        self.index().cities_by_state_numeric_code(code)
    }

    fn city_by_numeric_code(&self, code: &str) -> LookupResult<&City> {
        self.index().city_by_numeric_code(code)
    }

    fn city_by_legacy_code(&self, code: &str) -> LookupResult<&City> {
        self.index().city_by_legacy_code(code)
    }

    /// `/estados/{uf}` routing: a numeric segment is an IBGE code,
    /// anything else an abbreviation.
    fn state(&self, uf_or_code: &str) -> LookupResult<&State> {
        if is_numeric(uf_or_code) {
            self.state_by_numeric_code(uf_or_code)
        } else {
            self.state_by_abbreviation(uf_or_code)
        }
    }

    /// `/estados/{uf}/cidades` routing, same rule as [`IbgeLookup::state`].
    fn cities_of_state(&self, uf_or_code: &str) -> LookupResult<&[City]> {
        if is_numeric(uf_or_code) {
            self.cities_by_state_numeric_code(uf_or_code)
        } else {
            self.cities_by_state_abbreviation(uf_or_code)
        }
    }
}
