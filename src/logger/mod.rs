//! Logger module
//!
//! Provides logging utilities for the dev server: lifecycle messages,
//! access logging with multiple formats, and error/warning logging.
//! Everything goes to stdout/stderr; a dev server has no log files to
//! rotate.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("SPA dev server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving assets from: {}", config.spa.static_dir));
    write_info(&format!(
        "History API fallback: {}",
        if config.spa.history_api_fallback {
            "enabled"
        } else {
            "disabled"
        }
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("Route inspection: GET /__routes");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        write_info(&format!("[Headers] Count: {count}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

/// Log which view a deep link resolves to before the index rewrite
pub fn log_fallback(path: &str, view: Option<&str>) {
    match view {
        Some(view) => write_info(&format!("[Fallback] {path} -> index ({view})")),
        None => write_info(&format!("[Fallback] {path} -> index (no route matches)")),
    }
}

pub fn log_browser_opened(url: &str) {
    write_info(&format!("[Browser] Opened {url}"));
}

pub fn log_browser_open_failed(url: &str, err: &std::io::Error) {
    write_error(&format!("[WARN] Could not open browser at {url}: {err}"));
}
