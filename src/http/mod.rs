//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from
//! the SPA-serving business logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_asset_response,
    build_html_response, build_options_response,
};
