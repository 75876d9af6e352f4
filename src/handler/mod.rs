//! Request handler module
//!
//! Responsible for request dispatch: dev inspection endpoints, static
//! assets, and the history-API fallback for SPA deep links.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
