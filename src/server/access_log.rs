//! One log line per request.
//!
//! Lines look like `"GET /index.html HTTP/1.1" 200`; the subscriber's timer
//! supplies the `[HH:MM:SS]` prefix.

use axum::extract::Request;
use axum::http::{Method, StatusCode, Version};
use axum::middleware::Next;
use axum::response::Response;
use std::fmt;

/// The parts of a request that appear in the access log.
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
    pub version: Version,
}

impl RequestLine {
    pub fn from_request<B>(request: &axum::http::Request<B>) -> Self {
        let target = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        Self {
            method: request.method().clone(),
            target,
            version: request.version(),
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{} {} {:?}\"", self.method, self.target, self.version)
    }
}

/// Render the full access log message for a completed request.
pub fn format_entry(line: &RequestLine, status: StatusCode) -> String {
    format!("{} {}", line, status.as_u16())
}

/// Middleware logging every request once its response is ready.
pub async fn access_log(request: Request, next: Next) -> Response {
    let line = RequestLine::from_request(&request);
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!("{}", format_entry(&line, status));
    } else {
        tracing::info!("{}", format_entry(&line, status));
    }

    response
}
