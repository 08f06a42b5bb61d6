// crates/ibge-core/src/raw.rs

//! Rows exactly as they appear in the IBGE fixture files.
//!
//! NOTE: These types mirror the external datasets; they are converted into
//! [`State`](crate::State)/[`City`](crate::City) by the loader and are not
//! part of the public API.

use serde::Deserialize;

/// One entry of `cidades-ibge-uf.json`: a municipality together with its UF.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub uf: String,
    #[serde(rename = "ufNome")]
    pub uf_name: String,
    #[serde(rename = "codigoUf")]
    pub uf_code: u32,
    #[serde(rename = "codigo")]
    pub code: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "microrregiao", default)]
    pub micro_region: Option<u32>,
    #[serde(rename = "regiaoImediata", default)]
    pub immediate_region: Option<u32>,
}

/// One entry of `municipios-TOM-IBGE.json`: IBGE code -> TOM code.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TomRaw {
    #[serde(rename = "CODIGO-MUNICIPIO-IBGE")]
    pub ibge_code: u32,
    #[serde(rename = "CODIGO-MUNICIPIO-TOM")]
    pub tom_code: u32,
}

pub type CitiesRaw = Vec<CityRaw>;
pub type TomTableRaw = Vec<TomRaw>;
