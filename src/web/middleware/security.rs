//! Security headers middleware.

use axum::{
    body::Body,
    http::{
        header::{HeaderName, HeaderValue, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
        Request,
    },
    middleware::Next,
    response::Response,
};

/// Headers set on every response.
///
/// Board pages may be framed only by the board itself, and links posted in
/// threads must not leak the board URL or trigger DNS prefetches.
fn board_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (
            HeaderName::from_static("x-dns-prefetch-control"),
            HeaderValue::from_static("off"),
        ),
        (REFERRER_POLICY, HeaderValue::from_static("same-origin")),
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
    ]
}

/// Security headers middleware.
///
/// Overwrites any value a handler may have set for the same header.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in board_headers() {
        headers.insert(name, value);
    }

    response
}
