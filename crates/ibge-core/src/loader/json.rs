// crates/ibge-core/src/loader/json.rs
use super::common_io;
use super::default_data_dir;
use crate::error::{LoadError, Result};
use crate::model::{City, State};
use crate::raw::{CitiesRaw, TomTableRaw};
use crate::text::fold_abbreviation;
use crate::traits::{CityRows, RecordSource};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default name of the municipality list (one row per city, UF inlined).
pub const CITIES_FILE: &str = "cidades-ibge-uf.json";
/// Default name of the IBGE -> TOM cross-reference table.
pub const TOM_FILE: &str = "municipios-TOM-IBGE.json";

/// [`RecordSource`] reading the IBGE fixture files.
///
/// - States are derived from the city rows: one per `codigoUf`, the first
///   row that mentions it wins, returned sorted by name.
/// - Cities are joined with their TOM code (if the table has one), take
///   their denormalized state fields from that state, and are returned
///   sorted by abbreviation, then name.
///
/// Either file may be gzipped (`*.gz`, needs the `compact` feature).
#[derive(Clone, Debug)]
pub struct JsonSource {
    data_dir: PathBuf,
    cities_file: String,
    tom_file: String,
}

impl JsonSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonSource {
            data_dir: data_dir.into(),
            cities_file: CITIES_FILE.to_owned(),
            tom_file: TOM_FILE.to_owned(),
        }
    }

    /// Source over the sample fixtures shipped in this crate's `data/`.
    pub fn bundled() -> Self {
        Self::new(default_data_dir())
    }

    pub fn with_cities_file(mut self, name: impl Into<String>) -> Self {
        self.cities_file = name.into();
        self
    }

    pub fn with_tom_file(mut self, name: impl Into<String>) -> Self {
        self.tom_file = name.into();
        self
    }

    pub fn cities_path(&self) -> PathBuf {
        self.data_dir.join(&self.cities_file)
    }

    pub fn tom_path(&self) -> PathBuf {
        self.data_dir.join(&self.tom_file)
    }

    fn read_cities(&self) -> Result<CitiesRaw> {
        let path = self.cities_path();
        let rows: CitiesRaw = read_json(&path)?;
        info!(rows = rows.len(), path = %path.display(), "loaded city rows");
        Ok(rows)
    }

    /// IBGE code -> TOM code. Later rows overwrite earlier ones.
    fn read_tom(&self) -> Result<HashMap<u32, u32>> {
        let path = self.tom_path();
        let rows: TomTableRaw = read_json(&path)?;
        let table: HashMap<u32, u32> = rows.into_iter().map(|r| (r.ibge_code, r.tom_code)).collect();
        info!(codes = table.len(), path = %path.display(), "loaded TOM codes");
        Ok(table)
    }

    /// Unique states in first-seen order, keyed by IBGE code.
    fn states_from(rows: &CitiesRaw) -> Result<Vec<State>> {
        let mut seen: HashSet<u32> = HashSet::new();
        let mut states: Vec<State> = Vec::new();
        for row in rows {
            if seen.contains(&row.uf_code) {
                continue;
            }
            if row.uf.trim().is_empty() {
                return Err(LoadError::InvalidData(format!(
                    "city {} has an empty UF abbreviation",
                    row.code
                )));
            }
            seen.insert(row.uf_code);
            states.push(State {
                code: row.uf_code,
                name: row.uf_name.clone(),
                abbreviation: row.uf.clone(),
            });
        }
        Ok(states)
    }
}

impl RecordSource for JsonSource {
    fn fetch_states(&self) -> Result<Vec<State>> {
        let rows = self.read_cities()?;
        let mut states = Self::states_from(&rows)?;
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    fn fetch_cities(&self) -> Result<CityRows> {
        let rows = self.read_cities()?;
        let tom = self.read_tom()?;
        let states: HashMap<u32, State> = Self::states_from(&rows)?
            .into_iter()
            .map(|s| (s.code, s))
            .collect();

        let mut cities: Vec<City> = rows
            .into_iter()
            .map(|row| -> Result<City> {
                let owner = states.get(&row.uf_code).ok_or_else(|| {
                    LoadError::InvalidData(format!("city {} lost its UF {}", row.code, row.uf_code))
                })?;
                Ok(City {
                    code: row.code,
                    name: row.name,
                    legacy_code: tom.get(&row.code).copied(),
                    micro_region: row.micro_region,
                    immediate_region: row.immediate_region,
                    state_code: owner.code,
                    state_abbreviation: owner.abbreviation.clone(),
                    state_name: owner.name.clone(),
                })
            })
            .collect::<Result<_>>()?;
        cities.sort_by(|a, b| {
            fold_abbreviation(&a.state_abbreviation)
                .cmp(&fold_abbreviation(&b.state_abbreviation))
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(CityRows::from_cities(cities))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = common_io::open_stream(path)?;
    serde_json::from_reader(reader).map_err(LoadError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Index;

    #[test]
    fn bundled_states_are_unique_and_sorted_by_name() {
        let states = JsonSource::bundled().fetch_states().unwrap();
        let names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let mut codes: Vec<u32> = states.iter().map(|s| s.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), states.len());
        assert!(states.iter().any(|s| s.abbreviation == "SP" && s.code == 35));
    }

    #[test]
    fn bundled_cities_carry_tom_codes_when_known() {
        let rows = JsonSource::bundled().fetch_cities().unwrap();
        let sao_paulo = rows.cities.iter().find(|c| c.code == 3550308).unwrap();
        assert_eq!(sao_paulo.legacy_code, Some(7107));
        assert_eq!(sao_paulo.state_abbreviation, "SP");
        assert_eq!(sao_paulo.state_name, "São Paulo");

        let ouro_preto = rows.cities.iter().find(|c| c.code == 3146107).unwrap();
        assert_eq!(ouro_preto.legacy_code, None);
    }

    #[test]
    fn bundled_cities_are_ordered_by_state_then_name() {
        let rows = JsonSource::bundled().fetch_cities().unwrap();
        let keys: Vec<(String, String)> = rows
            .cities
            .iter()
            .map(|c| (c.state_abbreviation.clone(), c.name.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn bundled_fixtures_build_an_index() {
        let index = Index::from_source(&JsonSource::bundled()).unwrap();
        assert_eq!(index.state_by_abbreviation("df").unwrap().code, 53);
        assert_eq!(index.city_by_legacy_code("6001").unwrap().name, "Rio de Janeiro");
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = JsonSource::new("/no/such/dir").fetch_states().unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let dir = std::env::temp_dir().join(format!("ibge-core-bad-json-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CITIES_FILE), b"[{\"uf\": ").unwrap();
        let err = JsonSource::new(&dir).fetch_states().unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzipped_fixtures_are_read_transparently() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = std::env::temp_dir().join(format!("ibge-core-gz-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bundled = JsonSource::bundled();
        for (src, dst) in [
            (bundled.cities_path(), "cidades.json.gz"),
            (bundled.tom_path(), "tom.json.gz"),
        ] {
            let mut enc = GzEncoder::new(Vec::new(), Compression::default());
            enc.write_all(&std::fs::read(src).unwrap()).unwrap();
            std::fs::write(dir.join(dst), enc.finish().unwrap()).unwrap();
        }

        let source = JsonSource::new(&dir)
            .with_cities_file("cidades.json.gz")
            .with_tom_file("tom.json.gz");
        let index = Index::from_source(&source).unwrap();
        let plain = Index::from_source(&bundled).unwrap();
        assert_eq!(index.stats(), plain.stats());
        std::fs::remove_dir_all(&dir).ok();
    }
}
