//! Integration tests for the route table: forward matching, reverse
//! resolution, and the declaration-order guarantees.

use std::collections::HashMap;

use spadev::routing::{default_table, ResolveError, RouteEntry, RouteTable, RouteTableError};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn every_entry_matches_its_own_concretized_pattern() {
    let table = default_table();

    for entry in table.entries() {
        // Substitute an arbitrary non-empty value for every parameter
        let values: HashMap<String, String> = entry
            .pattern()
            .param_names()
            .map(|name| (name.to_string(), format!("value-{name}")))
            .collect();

        let concrete = table.resolve(entry.name(), &values).unwrap();
        let matched = table
            .match_path(&concrete)
            .unwrap_or_else(|| panic!("'{concrete}' did not match any route"));

        assert_eq!(matched.entry.name(), entry.name());
    }
}

#[test]
fn resolve_then_match_round_trips_params() {
    let table = default_table();

    for entry in table.entries() {
        if !entry.pattern().has_params() {
            continue;
        }
        let values: HashMap<String, String> = entry
            .pattern()
            .param_names()
            .enumerate()
            .map(|(i, name)| (name.to_string(), format!("v{i}")))
            .collect();

        let concrete = table.resolve(entry.name(), &values).unwrap();
        let matched = table.match_path(&concrete).unwrap();

        assert_eq!(matched.entry.name(), entry.name());
        assert_eq!(matched.params, values);
    }
}

#[test]
fn duplicate_names_fail_construction() {
    let entries = vec![
        RouteEntry::new("dup", "/one", "OneView"),
        RouteEntry::new("other", "/two", "TwoView"),
        RouteEntry::new("dup", "/three", "ThreeView"),
    ];
    assert_eq!(
        RouteTable::new(entries).unwrap_err(),
        RouteTableError::DuplicateName("dup".to_string())
    );
}

#[test]
fn unknown_path_returns_no_match() {
    let table = default_table();
    assert!(table.match_path("/nonexistent/path").is_none());
}

#[test]
fn literal_route_wins_over_parameterized_sibling() {
    let table = default_table();
    let matched = table.match_path("/problems/create").unwrap();
    assert_eq!(matched.entry.name(), "problem-create");
    assert!(!matched.params.contains_key("problem_id"));
}

#[test]
fn oauth_callback_captures_provider_name() {
    let table = default_table();
    let matched = table.match_path("/auth/google/callback").unwrap();
    assert_eq!(matched.entry.name(), "oauth_callback");
    assert_eq!(matched.params, params(&[("providerName", "google")]));
}

#[test]
fn resolve_problem_route() {
    let table = default_table();
    assert_eq!(
        table
            .resolve("problem", &params(&[("problem_id", "42")]))
            .unwrap(),
        "/problems/42"
    );
}

#[test]
fn resolve_without_required_param_fails() {
    let table = default_table();
    assert_eq!(
        table.resolve("formula", &HashMap::new()).unwrap_err(),
        ResolveError::MissingParameter {
            route: "formula".to_string(),
            param: "slug".to_string(),
        }
    );
}

#[test]
fn declaration_order_breaks_ambiguity() {
    // Two routes with the same shape: the one declared first wins.
    let entries = vec![
        RouteEntry::new("special", "/category/plots", "SpecialView"),
        RouteEntry::new("generic", "/category/:slug", "GenericView"),
    ];
    let table = RouteTable::new(entries).unwrap();

    assert_eq!(table.match_path("/category/plots").unwrap().entry.name(), "special");
    assert_eq!(table.match_path("/category/maths").unwrap().entry.name(), "generic");
}
