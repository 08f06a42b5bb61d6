//! ibge-cli - Command-line interface for ibge-core
//!
//! Builds the state/municipality index once from the IBGE fixture files and
//! answers a single query against it.
//!
//! Usage examples
//! --------------
//!
//! - Show index stats
//!   $ ibge stats
//!
//! - List all states
//!   $ ibge states
//!
//! - Show a state by abbreviation or IBGE code
//!   $ ibge state sp
//!   $ ibge state 35
//!
//! - List the cities of a state
//!   $ ibge cities rj
//!
//! - Lookup a city by IBGE or TOM code, as JSON
//!   $ ibge city 3550308 --format json
//!   $ ibge city-tom 7107 --format json
//!
//! Data source
//! -----------
//!
//! By default the sample fixtures bundled with `ibge-core` are loaded. Use
//! `--data-dir` (or `IBGE_DATA_DIR`) to point at a full dataset. A dataset
//! that fails to load or validate aborts before any query runs. Failures
//! exit non-zero; with `--format json` they print `{"error", "status"}`.
mod args;

use crate::args::{CliArgs, Commands, OutputFormat};
use anyhow::Context;
use clap::Parser;
use ibge_core::{
    City, IbgeLookup, Index, JsonSource, LoadError, LookupError, LookupService, State,
};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so `--format json` output stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = CliArgs::parse();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(ibge_core::loader::default_data_dir);
    let source = JsonSource::new(&data_dir)
        .with_cities_file(&args.cities_file)
        .with_tom_file(&args.tom_file);
    debug!(data_dir = %data_dir.display(), "loading IBGE index");

    let outcome = build_lookup(&source, &data_dir)
        .and_then(|lookup| run(&lookup, &args.command, args.format));

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match failure_body(&err) {
            Some(body) => {
                report(&body, args.format)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

/// Builds the index once. A failure here means no query ever runs.
fn build_lookup(source: &JsonSource, data_dir: &Path) -> anyhow::Result<LookupService> {
    let index = Index::from_source(source)
        .with_context(|| format!("failed to build the IBGE index from {}", data_dir.display()))?;
    Ok(LookupService::from(index))
}

fn run(lookup: &LookupService, command: &Commands, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = lookup.stats();
            match format {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Text => {
                    println!("Index statistics:");
                    println!("  States: {}", stats.states);
                    println!("  Cities: {}", stats.cities);
                    println!("  Cities with TOM code: {}", stats.cities_with_legacy_code);
                    println!("  States without cities: {}", stats.states_without_cities);
                }
            }
        }

        Commands::States => {
            let states = lookup.all_states();
            match format {
                OutputFormat::Json => print_json(&states)?,
                OutputFormat::Text => {
                    for s in states {
                        println!("{} {:>2}  {}", s.abbreviation, s.code, s.name);
                    }
                }
            }
        }

        Commands::State { uf } => {
            let state = lookup.state(uf)?;
            match format {
                OutputFormat::Json => print_json(state)?,
                OutputFormat::Text => print_state(state, lookup.cities_of_state(uf)?.len()),
            }
        }

        Commands::Cities { uf } => {
            let cities = lookup.cities_of_state(uf)?;
            match format {
                OutputFormat::Json => print_json(&cities)?,
                OutputFormat::Text => {
                    let state = lookup.state(uf)?;
                    println!("Cities in {} ({}):", state.name, cities.len());
                    for c in cities {
                        println!("  {}  {}", c.code, c.name);
                    }
                }
            }
        }

        Commands::City { code } => emit_city(lookup.city_by_numeric_code(code)?, format)?,

        Commands::CityTom { code } => emit_city(lookup.city_by_legacy_code(code)?, format)?,
    }

    Ok(())
}

fn print_state(state: &State, cities: usize) {
    println!("State: {}", state.name);
    println!("Abbreviation: {}", state.abbreviation);
    println!("IBGE code: {}", state.code);
    println!("Cities: {cities}");
}

fn emit_city(city: &City, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(city)?,
        OutputFormat::Text => {
            println!("City: {}", city.name);
            println!("IBGE code: {}", city.code);
            match city.legacy_code {
                Some(tom) => println!("TOM code: {tom}"),
                None => println!("TOM code: -"),
            }
            if let Some(micro) = city.micro_region {
                println!("Micro region: {micro}");
            }
            if let Some(immediate) = city.immediate_region {
                println!("Immediate region: {immediate}");
            }
            println!(
                "State: {} ({}, {})",
                city.state_name, city.state_abbreviation, city.state_code
            );
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error body mirrors what an HTTP adapter would send: message plus status.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

/// Maps a lookup or load failure onto its error body. Anything else is a
/// plain runtime error and goes back to anyhow.
fn failure_body(err: &anyhow::Error) -> Option<ErrorBody> {
    if let Some(lookup_err) = err.downcast_ref::<LookupError>() {
        return Some(ErrorBody {
            error: lookup_err.to_string(),
            status: lookup_err.http_status(),
        });
    }
    err.downcast_ref::<LoadError>().map(|load_err| ErrorBody {
        error: format!("{err:#}"),
        status: load_err.http_status(),
    })
}

fn report(body: &ErrorBody, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(body),
        OutputFormat::Text => {
            eprintln!("error: {} ({})", body.error, body.status);
            Ok(())
        }
    }
}
