//! Basic usage of ibge-core
//!
//! Builds the index from the bundled fixtures and runs each kind of lookup.
//!
//! ```text
//! cargo run -p ibge-core --example basic_usage
//! ```

use ibge_core::{IbgeLookup, Index, JsonSource, LookupService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lookup: LookupService = Index::from_source(&JsonSource::bundled())?.into();

    let stats = lookup.stats();
    println!(
        "Loaded {} states and {} cities ({} with a TOM code)",
        stats.states, stats.cities, stats.cities_with_legacy_code
    );

    println!("\n--- All states ---");
    for state in lookup.all_states() {
        println!("{} {:>2} {}", state.abbreviation, state.code, state.name);
    }

    println!("\n--- Cities of MG ---");
    for city in lookup.cities_by_state_abbreviation("mg")? {
        println!("{} {}", city.code, city.name);
    }

    println!("\n--- Point lookups ---");
    let city = lookup.city_by_numeric_code("3550308")?;
    println!("3550308 -> {} / {}", city.name, city.state_abbreviation);
    let city = lookup.city_by_legacy_code("6001")?;
    println!("TOM 6001 -> {}", city.name);

    println!("\n--- Failures ---");
    for attempt in [
        lookup.state_by_abbreviation("ZZ").map(|s| s.name.clone()),
        lookup.state_by_numeric_code("abc").map(|s| s.name.clone()),
    ] {
        if let Err(e) = attempt {
            println!("{} (HTTP {})", e, e.http_status());
        }
    }

    Ok(())
}
