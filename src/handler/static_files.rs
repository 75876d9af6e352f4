//! Static file serving module
//!
//! Loads built frontend assets from the configured static directory and
//! serves the entry document, with a generated placeholder page when no
//! build output exists yet.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

/// Serve a static asset, or None if the path resolves to no file
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    static_dir: &str,
) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) = load_asset(static_dir, ctx.path).await?;
    Some(build_conditional_response(
        &content,
        content_type,
        ctx.if_none_match.as_deref(),
        ctx.is_head,
    ))
}

/// Serve the SPA entry document
///
/// Falls back to a generated placeholder when the build output is
/// missing, so the server stays useful before the first bundle build.
pub async fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let index_path = Path::new(&state.config.spa.static_dir).join(&state.config.spa.index_file);

    match fs::read(&index_path).await {
        Ok(content) => build_conditional_response(
            &content,
            mime::get_content_type(Some("html")),
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        Err(_) => {
            logger::log_warning(&format!(
                "Entry document '{}' not found, serving placeholder",
                index_path.display()
            ));
            http::build_html_response(placeholder_index(state), ctx.is_head)
        }
    }
}

/// Load an asset from the static directory
///
/// Rejects paths escaping the static directory via canonicalization.
async fn load_asset(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let file_path = Path::new(static_dir).join(&clean_path);

    let static_dir_canonical = Path::new(static_dir).canonicalize().ok()?;

    // Asset miss is the common case for deep links, never logged
    let file_path_canonical = file_path.canonicalize().ok()?;
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path_canonical.display()
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build asset response with `ETag` revalidation
fn build_conditional_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::build_asset_response(Bytes::from(data.to_owned()), content_type, &etag, is_head)
}

/// Placeholder entry document listing the declared routes
fn placeholder_index(state: &AppState) -> String {
    let mut rows = String::new();
    for entry in state.routes.entries() {
        rows.push_str(&format!(
            "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>\n",
            entry.name(),
            entry.pattern(),
            entry.view(),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>spadev - no build output</title>
    <style>
        body {{ font-family: sans-serif; margin: 40px auto; max-width: 720px; }}
        table {{ border-collapse: collapse; width: 100%; }}
        td, th {{ border: 1px solid #ccc; padding: 6px 10px; text-align: left; }}
        code {{ background: #f4f4f4; padding: 1px 4px; }}
    </style>
</head>
<body>
    <h1>spadev</h1>
    <p>No entry document found in <code>{}</code>. Build the frontend, or
    point <code>spa.static_dir</code> at the build output.</p>
    <h2>Declared routes</h2>
    <table>
        <tr><th>name</th><th>path</th><th>view</th></tr>
        {rows}
    </table>
</body>
</html>"#,
        state.config.spa.static_dir,
    )
}
