// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SpaConfig};

impl Config {
    /// Load configuration from the default "spadev.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("spadev")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every setting has a default and can also be
    /// overridden through `SPADEV_`-prefixed environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPADEV"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8880)?
            .set_default("server.open", cfg!(target_os = "macos"))?
            .set_default("spa.static_dir", "dist")?
            .set_default("spa.index_file", "index.html")?
            .set_default("spa.history_api_fallback", true)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// URL to open in the browser after bind
    ///
    /// A wildcard bind address is not connectable, so it is replaced
    /// with localhost.
    pub fn browser_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        };
        format!("http://{host}:{}", self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_from("definitely-missing-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8880);
        assert_eq!(cfg.spa.static_dir, "dist");
        assert_eq!(cfg.spa.index_file, "index.html");
        assert!(cfg.spa.history_api_fallback);
        assert_eq!(cfg.logging.access_log_format, "common");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("definitely-missing-config-file").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8880);
    }

    #[test]
    fn test_browser_url_rewrites_wildcard_host() {
        let cfg = Config::load_from("definitely-missing-config-file").unwrap();
        assert_eq!(cfg.browser_url(), "http://localhost:8880");
    }
}
