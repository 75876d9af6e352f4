// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub spa: SpaConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Bind address; the default binds all interfaces
    pub host: String,
    pub port: u16,
    /// Auto-launch a browser after bind (defaults on only for macOS)
    pub open: bool,
    pub workers: Option<usize>,
}

/// Single-page application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpaConfig {
    /// Directory holding the built frontend assets
    pub static_dir: String,
    /// Entry document served for deep links
    pub index_file: String,
    /// Rewrite unmatched deep-link paths to the entry document so the
    /// client-side resolver runs instead of a server 404
    pub history_api_fallback: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    pub access_log_format: String,
    pub show_headers: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}
