//! Dev inspection API module
//!
//! JSON endpoints under `/__routes` for poking at the route table from
//! the command line while developing:
//! - `GET /__routes` lists the declared table
//! - `GET /__routes/match?path=/x/y` runs forward resolution
//! - `GET /__routes/resolve?name=problem&problem_id=42` runs reverse
//!   resolution

mod response;
mod types;

use std::collections::HashMap;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::routing::ResolveError;

use response::{error_response, json_response, unknown_endpoint};
use types::{MatchResponse, MatchedRoute, ResolveResponse, RouteListResponse, RouteSummary};

/// Prefix reserved for the dev inspection endpoints
pub const DEV_PREFIX: &str = "/__routes";

/// Whether a request path belongs to the dev API
pub fn is_dev_route(path: &str) -> bool {
    path == DEV_PREFIX || path.strip_prefix(DEV_PREFIX).is_some_and(|r| r.starts_with('/'))
}

/// Dispatch a dev API request
pub fn handle_dev_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let params = parse_query(ctx.query.unwrap_or(""));

    match ctx.path {
        DEV_PREFIX => handle_list(state),
        "/__routes/match" => handle_match(state, &params),
        "/__routes/resolve" => handle_resolve(state, &params),
        _ => unknown_endpoint(),
    }
}

/// List the full route table
fn handle_list(state: &AppState) -> Response<Full<Bytes>> {
    let routes: Vec<RouteSummary> = state
        .routes
        .entries()
        .iter()
        .map(|entry| RouteSummary {
            name: entry.name().to_string(),
            path: entry.pattern().raw().to_string(),
            view: entry.view().to_string(),
            view_source: state.views.get(entry.view()).map(|v| v.source.clone()),
        })
        .collect();

    json_response(
        StatusCode::OK,
        &RouteListResponse {
            count: routes.len(),
            routes,
        },
    )
}

/// Forward resolution: which route would a path mount?
///
/// No-match is reported with 200; it is a normal outcome, not an error.
fn handle_match(state: &AppState, params: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let Some(path) = params.get("path") else {
        return error_response(StatusCode::BAD_REQUEST, "missing 'path' query parameter");
    };

    let body = match state.routes.match_path(path) {
        Some(matched) => MatchResponse {
            path: path.clone(),
            matched: true,
            route: Some(MatchedRoute {
                name: matched.entry.name().to_string(),
                view: matched.entry.view().to_string(),
                params: matched.params,
            }),
        },
        None => MatchResponse {
            path: path.clone(),
            matched: false,
            route: None,
        },
    };

    json_response(StatusCode::OK, &body)
}

/// Reverse resolution: concrete path for a route name plus params
fn handle_resolve(state: &AppState, params: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let Some(name) = params.get("name") else {
        return error_response(StatusCode::BAD_REQUEST, "missing 'name' query parameter");
    };

    match state.routes.resolve(name, params) {
        Ok(path) => json_response(
            StatusCode::OK,
            &ResolveResponse {
                name: name.clone(),
                path,
            },
        ),
        Err(err @ ResolveError::RouteNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
        Err(err @ ResolveError::MissingParameter { .. }) => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

/// Parse a query string into key/value pairs
///
/// Values are taken literally apart from `%2F` and `+`, which is enough
/// for paths and slugs typed into a browser bar or curl.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_string(), value.replace("%2F", "/").replace('+', " "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(Config::load_from("missing-test-config").unwrap())
    }

    fn ctx<'a>(path: &'a str, query: Option<&'a str>) -> RequestContext<'a> {
        RequestContext {
            path,
            query,
            is_head: false,
            if_none_match: None,
        }
    }

    #[test]
    fn test_list_endpoint_ok() {
        let state = test_state();
        let resp = handle_dev_request(&ctx("/__routes", None), &state);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_match_endpoint_ok_even_for_no_match() {
        let state = test_state();
        let resp = handle_dev_request(
            &ctx("/__routes/match", Some("path=%2Fproblems%2F42")),
            &state,
        );
        assert_eq!(resp.status(), StatusCode::OK);

        // No-match is still a 200: it is a normal outcome
        let resp = handle_dev_request(&ctx("/__routes/match", Some("path=%2Fnope")), &state);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_match_endpoint_requires_path() {
        let state = test_state();
        let resp = handle_dev_request(&ctx("/__routes/match", None), &state);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_resolve_endpoint() {
        let state = test_state();
        let resp = handle_dev_request(
            &ctx("/__routes/resolve", Some("name=problem&problem_id=42")),
            &state,
        );
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_resolve_unknown_name_is_404() {
        let state = test_state();
        let resp = handle_dev_request(&ctx("/__routes/resolve", Some("name=nope")), &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_resolve_missing_param_is_400() {
        let state = test_state();
        let resp = handle_dev_request(&ctx("/__routes/resolve", Some("name=formula")), &state);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_endpoint_is_404() {
        let state = test_state();
        let resp = handle_dev_request(&ctx("/__routes/bogus", None), &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_is_dev_route() {
        assert!(is_dev_route("/__routes"));
        assert!(is_dev_route("/__routes/match"));
        assert!(!is_dev_route("/__routesx"));
        assert!(!is_dev_route("/problems"));
    }

    #[test]
    fn test_parse_query() {
        let params = parse_query("name=problem&problem_id=42");
        assert_eq!(params["name"], "problem");
        assert_eq!(params["problem_id"], "42");
    }

    #[test]
    fn test_parse_query_decodes_slashes() {
        let params = parse_query("path=%2Fproblems%2F42");
        assert_eq!(params["path"], "/problems/42");
    }

    #[test]
    fn test_parse_query_empty() {
        assert!(parse_query("").is_empty());
    }
}
