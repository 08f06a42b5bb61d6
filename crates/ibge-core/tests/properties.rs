#![cfg(feature = "json")]

//! Consistency properties of a built index, checked against the bundled
//! fixtures and against a small hand-written dataset.

use ibge_core::{City, IbgeLookup, Index, LookupService, State, VecSource};

fn bundled() -> LookupService {
    Index::from_source(&ibge_core::JsonSource::bundled())
        .expect("bundled fixtures must build")
        .into()
}

fn sp_rj() -> (Vec<State>, Vec<City>) {
    let states = vec![
        State {
            code: 35,
            abbreviation: "SP".into(),
            name: "São Paulo".into(),
        },
        State {
            code: 33,
            abbreviation: "RJ".into(),
            name: "Rio de Janeiro".into(),
        },
    ];
    let cities = vec![
        City {
            code: 3550308,
            name: "São Paulo".into(),
            legacy_code: None,
            micro_region: None,
            immediate_region: None,
            state_code: 35,
            state_abbreviation: "SP".into(),
            state_name: "São Paulo".into(),
        },
        City {
            code: 3304557,
            name: "Rio de Janeiro".into(),
            legacy_code: None,
            micro_region: None,
            immediate_region: None,
            state_code: 33,
            state_abbreviation: "RJ".into(),
            state_name: "Rio de Janeiro".into(),
        },
    ];
    (states, cities)
}

#[test]
fn every_state_is_found_by_its_abbreviation_and_code() {
    let svc = bundled();
    for state in svc.all_states() {
        let upper = state.abbreviation.to_uppercase();
        assert_eq!(svc.state_by_abbreviation(&upper).unwrap(), state);
        assert_eq!(
            svc.state_by_abbreviation(&state.abbreviation.to_lowercase())
                .unwrap(),
            state
        );
        assert_eq!(
            svc.state_by_numeric_code(&state.code.to_string()).unwrap(),
            state
        );
    }
}

#[test]
fn every_city_is_found_and_its_state_resolves() {
    let svc = bundled();
    let mut seen = 0;
    for state in svc.all_states() {
        for city in svc.cities_by_state_abbreviation(&state.abbreviation).unwrap() {
            seen += 1;
            assert_eq!(svc.city_by_numeric_code(&city.code.to_string()).unwrap(), city);
            let owner = svc
                .state_by_numeric_code(&city.state_code.to_string())
                .unwrap();
            assert_eq!(owner.abbreviation, city.state_abbreviation);
            assert_eq!(owner.name, city.state_name);
            if let Some(legacy) = city.legacy_code {
                assert_eq!(svc.city_by_legacy_code(&legacy.to_string()).unwrap(), city);
            }
        }
    }
    assert_eq!(seen, svc.stats().cities);
}

#[test]
fn both_city_listings_agree_for_every_state() {
    let svc = bundled();
    for state in svc.all_states() {
        let by_abbreviation = svc
            .cities_by_state_abbreviation(&state.abbreviation)
            .unwrap();
        let by_code = svc
            .cities_by_state_numeric_code(&state.code.to_string())
            .unwrap();
        assert_eq!(by_abbreviation, by_code, "listings diverge for {}", state.abbreviation);
    }
}

#[test]
fn record_counts_agree_across_tables() {
    let svc = bundled();
    let stats = svc.stats();
    assert_eq!(stats.states, svc.all_states().len());
    let listed: usize = svc
        .all_states()
        .iter()
        .map(|s| svc.cities_of_state(&s.abbreviation).unwrap().len())
        .sum();
    assert_eq!(listed, stats.cities);
    assert_eq!(stats.cities, 18);
    assert_eq!(stats.cities_with_legacy_code, 14);
    assert_eq!(stats.states_without_cities, 0);
}

#[test]
fn unknown_and_malformed_keys() {
    let svc = bundled();
    let unknown = svc.state_by_abbreviation("ZZ").unwrap_err();
    assert!(unknown.is_not_found());
    assert_eq!(unknown.http_status(), 404);

    for err in [
        svc.state_by_numeric_code("abc").unwrap_err(),
        svc.cities_by_state_numeric_code("abc").unwrap_err(),
        svc.city_by_numeric_code("abc").unwrap_err(),
        svc.city_by_legacy_code("abc").unwrap_err(),
    ] {
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(err.http_status(), 400);
    }
}

#[test]
fn state_without_cities_lists_empty() {
    let (mut states, cities) = sp_rj();
    states.push(State {
        code: 12,
        abbreviation: "AC".into(),
        name: "Acre".into(),
    });
    let svc: LookupService = Index::from_source(&VecSource::new(states, cities))
        .unwrap()
        .into();
    assert_eq!(svc.cities_by_state_abbreviation("ac").unwrap(), &[] as &[City]);
    assert!(svc.cities_by_state_numeric_code("12").unwrap().is_empty());
}

#[test]
fn sao_paulo_rio_scenario() {
    let (states, cities) = sp_rj();
    let svc: LookupService = Index::build(states.clone(), cities.clone()).unwrap().into();

    assert_eq!(svc.all_states(), states.as_slice());

    let sp_cities = svc.cities_by_state_abbreviation("sp").unwrap();
    assert_eq!(sp_cities.len(), 1);
    assert_eq!(sp_cities[0].code, 3550308);

    assert_eq!(svc.city_by_numeric_code("3550308").unwrap(), &cities[0]);
    assert!(svc.state_by_abbreviation("xx").unwrap_err().is_not_found());
}

#[test]
fn records_serialize_with_public_field_names() {
    let svc = bundled();
    let city = svc.city_by_numeric_code("3146107").unwrap();
    let json = serde_json::to_value(city).unwrap();
    assert_eq!(json["codigo_ibge"], 3146107);
    assert_eq!(json["nome"], "Ouro Preto");
    assert_eq!(json["estado_sigla"], "MG");
    assert!(json.get("codigo_tom").is_none());

    let state = serde_json::to_value(svc.state("31").unwrap()).unwrap();
    assert_eq!(
        state,
        serde_json::json!({"codigo_ibge": 31, "nome": "Minas Gerais", "sigla": "MG"})
    );
}
