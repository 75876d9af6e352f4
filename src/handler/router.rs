//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, dev
//! endpoint dispatch, static asset serving, and the history-API
//! fallback that rewrites deep links to the entry document.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path();
    let is_head = method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method) {
        return Ok(resp);
    }

    // 2. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let ctx = RequestContext {
        path,
        query: uri.query(),
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    // 3. Dispatch
    let response = if api::is_dev_route(ctx.path) {
        api::handle_dev_request(&ctx, &state)
    } else {
        serve_spa(&ctx, &state).await
    };

    // 4. Access log
    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            ctx.path.to_string(),
        );
        entry.query = ctx.query.map(ToString::to_string);
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes(&response);
        entry.user_agent = user_agent;
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return a response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Serve the single-page application
///
/// Assets resolve from the static directory. A miss on a path with a
/// file extension is a genuine missing asset (404). A miss on an
/// extensionless path is a deep link: with the history-API fallback on,
/// the entry document is served so the client-side route table takes
/// over; the server-side table is consulted only to log which view the
/// link will mount.
async fn serve_spa(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if ctx.path != "/" {
        if let Some(response) = static_files::serve_asset(ctx, &state.config.spa.static_dir).await {
            return response;
        }
        if has_extension(ctx.path) {
            return http::build_404_response();
        }
        if !state.config.spa.history_api_fallback {
            return http::build_404_response();
        }
        let matched = state.routes.match_path(ctx.path);
        logger::log_fallback(ctx.path, matched.as_ref().map(|m| m.entry.view()));
    }

    static_files::serve_index(ctx, state).await
}

/// Whether the final path segment names a file (has an extension)
fn has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.') && !segment.starts_with('.'))
}

/// Response body size as reported by Content-Length
fn body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("/js/app.8f2c1.js"));
        assert!(has_extension("/favicon.ico"));
        assert!(!has_extension("/problems/42"));
        assert!(!has_extension("/auth/login"));
        // Dotfile segments are not treated as assets
        assert!(!has_extension("/.well-known"));
    }
}
