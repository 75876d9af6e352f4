// Dev inspection API types module

use std::collections::HashMap;

use serde::Serialize;

/// One route as reported by `GET /__routes`
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: String,
    /// Source hint from the view registry, when the view is registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_source: Option<String>,
}

/// Response for `GET /__routes`
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub count: usize,
    pub routes: Vec<RouteSummary>,
}

/// Response for `GET /__routes/match`
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub path: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<MatchedRoute>,
}

/// The matched entry within a `MatchResponse`
#[derive(Debug, Serialize)]
pub struct MatchedRoute {
    pub name: String,
    pub view: String,
    pub params: HashMap<String, String>,
}

/// Response for `GET /__routes/resolve`
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub name: String,
    pub path: String,
}
