// Application state module
// Read-only state shared across connection tasks

use std::sync::Arc;

use crate::routing::{default_registry, default_table, RouteTable, ViewRegistry};

use super::types::Config;

/// Application state
///
/// Everything here is immutable after startup: the config is fixed for
/// the process lifetime and the route table is read-only by design, so
/// the state can be shared across any number of connection tasks
/// without synchronization.
pub struct AppState {
    pub config: Config,
    pub routes: Arc<RouteTable>,
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            routes: Arc::new(default_table()),
            views: Arc::new(default_registry()),
        }
    }
}
