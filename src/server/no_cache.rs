//! Response headers that disable caching in browsers and proxies.

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";
pub const PRAGMA: &str = "no-cache";
pub const EXPIRES: &str = "0";

/// The header set stamped on every response.
pub fn headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL)),
        (header::PRAGMA, HeaderValue::from_static(PRAGMA)),
        (header::EXPIRES, HeaderValue::from_static(EXPIRES)),
    ]
}

/// Layer `router` so its responses carry [`headers`], replacing any value the
/// inner service chose.
pub fn apply(router: Router) -> Router {
    headers().into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(name, value))
    })
}
