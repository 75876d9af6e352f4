//! Forward route matching module
//!
//! Maps a request path to the first structurally matching route entry
//! and captures its parameter values. No-match is a normal outcome, not
//! an error; the caller picks the fallback presentation.

use std::collections::HashMap;

use super::pattern::{split_segments, Segment};
use super::table::{RouteEntry, RouteTable};

/// A successful forward resolution: the matched entry plus captured
/// parameter values keyed by parameter name
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: HashMap<String, String>,
}

impl RouteTable {
    /// Resolve a request path to the first matching entry, in
    /// declaration order
    ///
    /// Pure function of the table and the path: no I/O, no locks, safe
    /// to call from any number of concurrent readers. Query strings must
    /// be stripped by the caller beforehand.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let request = split_segments(path);
        self.entries()
            .iter()
            .find_map(|entry| match_entry(entry, &request))
    }
}

/// Structural comparison of one entry against the request segments
///
/// Same segment count, literals equal exactly (case-sensitive), and each
/// parameter segment captures one non-empty request segment.
fn match_entry<'a>(entry: &'a RouteEntry, request: &[&str]) -> Option<RouteMatch<'a>> {
    let pattern = entry.pattern().segments();
    if pattern.len() != request.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (segment, value) in pattern.iter().zip(request) {
        match segment {
            Segment::Literal(literal) => {
                if literal != value {
                    return None;
                }
            }
            Segment::Param(name) => {
                if value.is_empty() {
                    return None;
                }
                params.insert(name.clone(), (*value).to_string());
            }
        }
    }

    Some(RouteMatch { entry, params })
}
