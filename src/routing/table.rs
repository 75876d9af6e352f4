//! Route table module
//!
//! The route table is an ordered sequence of named entries, built once
//! at startup and immutable afterwards. Declaration order is load-bearing:
//! the first structural match wins, so literal routes that share a shape
//! with a parameterized route must be declared before it.

use thiserror::Error;

use super::pattern::PathPattern;

/// Route table construction errors (configuration errors, fatal)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),
    #[error("duplicate route pattern '{0}'")]
    DuplicatePattern(String),
}

/// One declared route: a path pattern, a unique symbolic name, and an
/// opaque view identifier resolved by the hosting application
#[derive(Debug, Clone)]
pub struct RouteEntry {
    name: String,
    pattern: PathPattern,
    view: String,
}

impl RouteEntry {
    pub fn new(name: &str, path: &str, view: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: PathPattern::parse(path),
            view: view.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> &str {
        &self.view
    }
}

/// Ordered, immutable route table
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from entries in declaration order
    ///
    /// Fails if two entries share a name or a textually identical
    /// pattern; both are configuration mistakes that would make one of
    /// the entries unreachable or reverse resolution ambiguous.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            for earlier in &entries[..i] {
                if earlier.name == entry.name {
                    return Err(RouteTableError::DuplicateName(entry.name.clone()));
                }
                if earlier.pattern.raw() == entry.pattern.raw() {
                    return Err(RouteTableError::DuplicatePattern(
                        entry.pattern.raw().to_string(),
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Look up an entry by its symbolic name
    pub fn entry(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The application's route table, in declaration order
///
/// `problem-create` must stay ahead of `problem`: both have the shape
/// `/problems/<segment>`, and first-match resolution is what keeps
/// `/problems/create` from capturing `create` as a `problem_id`.
pub fn default_table() -> RouteTable {
    let entries = vec![
        // main
        RouteEntry::new("homepage", "/", "HomeView"),
        // auth
        RouteEntry::new("login", "/auth/login", "LoginView"),
        RouteEntry::new("register", "/auth/register", "RegisterView"),
        RouteEntry::new("oauth_callback", "/auth/:providerName/callback", "CallbackView"),
        // cabinets
        RouteEntry::new("cabinet", "/cabinet", "CabinetView"),
        RouteEntry::new("cabinet/history", "/cabinet/history", "HistoryView"),
        // sciences
        RouteEntry::new("sciences", "/sciences", "SciencesListView"),
        RouteEntry::new("science", "/science/:slug", "ScienceDetailView"),
        RouteEntry::new("plots", "/special-category/plots", "PlotView"),
        RouteEntry::new("equations", "/special-category/equations", "EquationsView"),
        RouteEntry::new("category", "/category/:slug", "CategoryDetailView"),
        RouteEntry::new("formula", "/formula/:slug", "FormulaDetailView"),
        // problems
        RouteEntry::new("problems", "/problems", "ProblemsListView"),
        RouteEntry::new("problem-create", "/problems/create", "ProblemCreateView"),
        RouteEntry::new("problem", "/problems/:problem_id", "ProblemView"),
    ];

    RouteTable::new(entries).expect("built-in route table has unique names and patterns")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_builds() {
        let table = default_table();
        assert_eq!(table.len(), 15);
        assert_eq!(table.entry("homepage").unwrap().pattern().raw(), "/");
        assert_eq!(table.entry("problem").unwrap().view(), "ProblemView");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let entries = vec![
            RouteEntry::new("home", "/", "HomeView"),
            RouteEntry::new("home", "/other", "OtherView"),
        ];
        assert_eq!(
            RouteTable::new(entries).unwrap_err(),
            RouteTableError::DuplicateName("home".to_string())
        );
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let entries = vec![
            RouteEntry::new("a", "/same", "AView"),
            RouteEntry::new("b", "/same", "BView"),
        ];
        assert_eq!(
            RouteTable::new(entries).unwrap_err(),
            RouteTableError::DuplicatePattern("/same".to_string())
        );
    }

    #[test]
    fn test_entry_lookup() {
        let table = default_table();
        assert!(table.entry("oauth_callback").is_some());
        assert!(table.entry("missing").is_none());
    }
}
