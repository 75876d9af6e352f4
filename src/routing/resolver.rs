//! Reverse route resolution module
//!
//! Builds a concrete path from a route name and parameter values. Both
//! failure modes are caller mistakes, surfaced to the developer rather
//! than swallowed.

use std::collections::HashMap;

use thiserror::Error;

use super::pattern::Segment;
use super::table::RouteTable;

/// Reverse resolution errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The requested symbolic name has no entry in the table
    #[error("no route named '{0}'")]
    RouteNotFound(String),
    /// The pattern requires a parameter the caller did not supply
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },
}

impl RouteTable {
    /// Build the concrete path for a named route
    ///
    /// Literal segments pass through unchanged; each parameter segment
    /// is replaced with the value from `params` under its name. Extra
    /// entries in `params` are ignored.
    pub fn resolve(
        &self,
        name: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, ResolveError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| ResolveError::RouteNotFound(name.to_string()))?;

        let mut path = String::new();
        for segment in entry.pattern().segments() {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| {
                        ResolveError::MissingParameter {
                            route: name.to_string(),
                            param: param.clone(),
                        }
                    })?;
                    path.push_str(value);
                }
            }
        }

        // The homepage pattern has no segments; its path is the bare slash.
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::default_table;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_literal_route() {
        let table = default_table();
        assert_eq!(
            table.resolve("login", &HashMap::new()).unwrap(),
            "/auth/login"
        );
    }

    #[test]
    fn test_resolve_homepage_is_slash() {
        let table = default_table();
        assert_eq!(table.resolve("homepage", &HashMap::new()).unwrap(), "/");
    }

    #[test]
    fn test_resolve_substitutes_params() {
        let table = default_table();
        assert_eq!(
            table
                .resolve("problem", &params(&[("problem_id", "42")]))
                .unwrap(),
            "/problems/42"
        );
        assert_eq!(
            table
                .resolve("oauth_callback", &params(&[("providerName", "google")]))
                .unwrap(),
            "/auth/google/callback"
        );
    }

    #[test]
    fn test_resolve_unknown_name() {
        let table = default_table();
        assert_eq!(
            table.resolve("nope", &HashMap::new()).unwrap_err(),
            ResolveError::RouteNotFound("nope".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_parameter() {
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
    fn test_resolve_ignores_extra_params() {
        let table = default_table();
        assert_eq!(
            table
                .resolve("sciences", &params(&[("unused", "x")]))
                .unwrap(),
            "/sciences"
        );
    }
}
