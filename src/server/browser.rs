//! Browser auto-open module
//!
//! Launches the platform's URL opener once after the listener binds,
//! mirroring the dev-server `open` option.

use std::process::Command;

use crate::logger;

/// Open the given URL in the default browser, logging the outcome
///
/// Failure to open is never fatal; the server keeps running.
pub fn open_browser(url: &str) {
    let result = spawn_opener(url);
    match result {
        Ok(()) => logger::log_browser_opened(url),
        Err(err) => logger::log_browser_open_failed(url, &err),
    }
}

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", url]).spawn().map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
