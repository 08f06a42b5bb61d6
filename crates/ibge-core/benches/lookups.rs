use criterion::{criterion_group, criterion_main, Criterion};
use ibge_core::{City, IbgeLookup, Index, LookupService, State, VecSource};
use std::hint::black_box;

const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// 27 states with ~5.5k cities in total, roughly the real dataset size.
fn synthetic() -> VecSource {
    let states: Vec<State> = UFS
        .iter()
        .enumerate()
        .map(|(i, uf)| State {
            code: 11 + i as u32,
            name: format!("Estado {uf}"),
            abbreviation: (*uf).to_owned(),
        })
        .collect();
    let mut cities = Vec::new();
    for state in &states {
        for n in 0..206u32 {
            cities.push(City {
                code: state.code * 100_000 + n,
                name: format!("Cidade {n}"),
                legacy_code: Some(state.code * 1_000 + n),
                micro_region: None,
                immediate_region: None,
                state_code: state.code,
                state_abbreviation: state.abbreviation.clone(),
                state_name: state.name.clone(),
            });
        }
    }
    VecSource::new(states, cities)
}

fn bench_build(c: &mut Criterion) {
    let source = synthetic();
    c.bench_function("index_build", |b| {
        b.iter(|| Index::from_source(black_box(&source)).unwrap())
    });
}

fn bench_lookups(c: &mut Criterion) {
    let svc: LookupService = Index::from_source(&synthetic()).unwrap().into();

    c.bench_function("state_by_abbreviation", |b| {
        b.iter(|| svc.state_by_abbreviation(black_box("sp")).unwrap())
    });
    c.bench_function("cities_by_state_numeric_code", |b| {
        b.iter(|| svc.cities_by_state_numeric_code(black_box("35")).unwrap())
    });
    c.bench_function("city_by_numeric_code", |b| {
        b.iter(|| svc.city_by_numeric_code(black_box("3500105")).unwrap())
    });
    c.bench_function("city_by_legacy_code_miss", |b| {
        b.iter(|| svc.city_by_legacy_code(black_box("1")).unwrap_err())
    });
}

criterion_group!(benches, bench_build, bench_lookups);
criterion_main!(benches);
