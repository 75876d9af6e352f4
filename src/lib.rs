//! spadev - development server for single-page applications
//!
//! The core is a named route table: an ordered set of URL path patterns
//! with forward matching (path to entry plus captured parameters) and
//! reverse resolution (name plus parameters to path). Around it sits a
//! tokio + hyper dev server that serves built frontend assets, rewrites
//! unmatched deep links to the entry document (history-API fallback),
//! and exposes JSON inspection endpoints under `/__routes`.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
