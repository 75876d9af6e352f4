//! Routing module
//!
//! The route table core: named URL path patterns with forward matching
//! (path -> entry + captured params) and reverse resolution (name +
//! params -> path). The table is built once at startup and shared
//! read-only; both operations are pure and lock-free.

mod matcher;
mod pattern;
mod resolver;
mod table;
mod views;

pub use matcher::RouteMatch;
pub use pattern::{PathPattern, Segment};
pub use resolver::ResolveError;
pub use table::{default_table, RouteEntry, RouteTable, RouteTableError};
pub use views::{default_registry, ViewInfo, ViewRegistry};
