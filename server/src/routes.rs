use std::path::PathBuf;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::ping_handler;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Static host for the board page. The wasm bundle is rebuilt in place, so
/// responses ask the browser to revalidate.
pub fn app(public_dir: PathBuf) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}
