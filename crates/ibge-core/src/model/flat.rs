// crates/ibge-core/src/model/flat.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// A federative unit (UF).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// IBGE code, e.g. 35 for São Paulo.
    #[serde(rename = "codigo_ibge")]
    pub code: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Two-letter abbreviation, e.g. "SP".
    #[serde(rename = "sigla")]
    pub abbreviation: String,
}

/// A municipality.
///
/// The owning state is denormalized into every city so a single record is
/// enough to render a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// IBGE code, e.g. 3550308 for São Paulo.
    #[serde(rename = "codigo_ibge")]
    pub code: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Legacy code from the Federal Revenue TOM table. Some cities lack one.
    #[serde(rename = "codigo_tom", default, skip_serializing_if = "Option::is_none")]
    pub legacy_code: Option<u32>,
    #[serde(rename = "micro_regiao", default, skip_serializing_if = "Option::is_none")]
    pub micro_region: Option<u32>,
    #[serde(rename = "regiao_imediata", default, skip_serializing_if = "Option::is_none")]
    pub immediate_region: Option<u32>,
    #[serde(rename = "estado_codigo_ibge")]
    pub state_code: u32,
    #[serde(rename = "estado_sigla")]
    pub state_abbreviation: String,
    #[serde(rename = "estado_nome")]
    pub state_name: String,
}

/// Position of a record in one of the master vectors.
pub(crate) type Slot = u32;

/// The immutable lookup index.
///
/// Laid out as a "Structure of Arrays": the master `cities` vector is
/// grouped by state (in state order, source order inside each group), so
/// every per-state listing is a contiguous slice addressed by a range.
///
/// Fields are crate-private and nothing takes `&mut self`: once
/// [`Index::build`] returns, the value can be shared across threads
/// (usually behind an `Arc`) without locking.
#[derive(Clone, Debug)]
pub struct Index {
    /// Master list of all states, in source order.
    pub(crate) states: Vec<State>,
    /// Master list of all cities, grouped by state.
    pub(crate) cities: Vec<City>,

    /// Upper-cased abbreviation -> slot in `states`.
    pub(crate) state_by_abbreviation: HashMap<String, Slot>,
    /// IBGE state code -> slot in `states`.
    pub(crate) state_by_code: HashMap<u32, Slot>,

    /// Upper-cased abbreviation -> range in `cities`.
    pub(crate) cities_by_abbreviation: HashMap<String, Range<Slot>>,
    /// IBGE state code -> range in `cities`. Derived from
    /// `cities_by_abbreviation`, never filled on its own.
    pub(crate) cities_by_state_code: HashMap<u32, Range<Slot>>,

    /// IBGE city code -> slot in `cities`.
    pub(crate) city_by_code: HashMap<u32, Slot>,
    /// TOM code -> slot in `cities`.
    pub(crate) city_by_legacy_code: HashMap<u32, Slot>,
}

impl State {
    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

impl City {
    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn legacy_code(&self) -> Option<u32> {
        self.legacy_code
    }

    pub fn state_abbreviation(&self) -> &str {
        &self.state_abbreviation
    }
}
