//! ibge-cli
//! ========
//!
//! Command-line interface for the `ibge-core` state/municipality index.
//!
//! This crate primarily provides a binary (`ibge-cli`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! ibge-cli stats
//! ibge-cli states
//! ibge-cli state sp
//! ibge-cli cities 35
//! ibge-cli city 3550308 --format json
//! ibge-cli city-tom 7107
//! ```
//!
//! Configuration comes from flags or the environment:
//!
//! - `IBGE_DATA_DIR` - directory with the fixture files
//! - `IBGE_CITIES_FILE` - municipality list (default `cidades-ibge-uf.json`)
//! - `IBGE_TOM_FILE` - TOM table (default `municipios-TOM-IBGE.json`)
//! - `RUST_LOG` - log filter, logs go to stderr (default `warn`)
//!
//! For programmatic access use the [`ibge-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
