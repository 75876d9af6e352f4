//! Path pattern parsing module
//!
//! A pattern is a sequence of `/`-delimited segments. A segment starting
//! with `:` is a parameter segment and captures one request segment;
//! anything else is a literal compared case-sensitively.

use std::fmt;

/// One segment of a path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches a request segment byte-for-byte
    Literal(String),
    /// Captures any single non-empty request segment under this name
    Param(String),
}

/// A parsed path pattern, e.g. `/auth/:providerName/callback`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string into segments
    ///
    /// `/` parses to zero segments. A trailing slash produces an empty
    /// trailing literal, which no request segment can match.
    pub fn parse(raw: &str) -> Self {
        let segments = split_segments(raw)
            .into_iter()
            .map(|seg| {
                seg.strip_prefix(':').map_or_else(
                    || Segment::Literal(seg.to_string()),
                    |name| Segment::Param(name.to_string()),
                )
            })
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The pattern as originally written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameter segments, in pattern order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the pattern captures any parameters
    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a request path into segments
///
/// The leading slash is not a segment of its own: `/` yields no
/// segments, `/a/b` yields `["a", "b"]`. Interior or trailing empty
/// segments are preserved so that `/a//b` and `/a/b/` stay distinct
/// from `/a/b`.
pub fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.raw(), "/");
    }

    #[test]
    fn test_parse_literals() {
        let pattern = PathPattern::parse("/auth/login");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("auth".to_string()),
                Segment::Literal("login".to_string()),
            ]
        );
        assert!(!pattern.has_params());
    }

    #[test]
    fn test_parse_params() {
        let pattern = PathPattern::parse("/auth/:providerName/callback");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("auth".to_string()),
                Segment::Param("providerName".to_string()),
                Segment::Literal("callback".to_string()),
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["providerName"]);
    }

    #[test]
    fn test_split_segments() {
        assert!(split_segments("/").is_empty());
        assert!(split_segments("").is_empty());
        assert_eq!(split_segments("/a/b"), vec!["a", "b"]);
        assert_eq!(split_segments("/a/b/"), vec!["a", "b", ""]);
        assert_eq!(split_segments("/a//b"), vec!["a", "", "b"]);
    }
}
