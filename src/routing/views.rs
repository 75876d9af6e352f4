//! View registry module
//!
//! Route entries carry an opaque view identifier; this registry maps
//! identifiers to metadata about the renderable unit (currently its
//! source location in the frontend tree). Keeping the mapping out of
//! the route table leaves the table independent of any component model.

use std::collections::HashMap;

/// Metadata about one renderable view
#[derive(Debug, Clone)]
pub struct ViewInfo {
    pub id: String,
    /// Where the view lives in the frontend source tree
    pub source: String,
}

/// Registry of view identifiers known to the hosting application
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewInfo>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, source: &str) {
        self.views.insert(
            id.to_string(),
            ViewInfo {
                id: id.to_string(),
                source: source.to_string(),
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&ViewInfo> {
        self.views.get(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Registry for the views referenced by the default route table
pub fn default_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register("HomeView", "src/views/main/HomeView.vue");
    registry.register("LoginView", "src/views/users/LoginView.vue");
    registry.register("RegisterView", "src/views/users/RegisterView.vue");
    registry.register("CallbackView", "src/views/users/CallbackView.vue");
    registry.register("CabinetView", "src/views/cabinets/CabinetView.vue");
    registry.register("HistoryView", "src/views/cabinets/HistoryView.vue");
    registry.register("SciencesListView", "src/views/sciences/SciencesListView.vue");
    registry.register("ScienceDetailView", "src/views/sciences/ScienceDetailView.vue");
    registry.register("PlotView", "src/views/sciences/PlotView.vue");
    registry.register("EquationsView", "src/views/sciences/EquationsView.vue");
    registry.register("CategoryDetailView", "src/views/sciences/CategoryDetailView.vue");
    registry.register("FormulaDetailView", "src/views/sciences/FormulaDetailView.vue");
    registry.register("ProblemsListView", "src/views/problems/ProblemsListView.vue");
    registry.register("ProblemCreateView", "src/views/problems/ProblemCreateView.vue");
    registry.register("ProblemView", "src/views/problems/ProblemView.vue");
    registry
}
