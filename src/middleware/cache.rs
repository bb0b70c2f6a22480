use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: [&str; 8] = [
    ".css", ".js", ".svg", ".png", ".jpg", ".webp", ".woff2", ".ico",
];

fn is_static(path: &str) -> bool {
    path.starts_with("/static/") || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Sets cache control headers
/// - Static files: cached for a year
/// - Pages and API responses: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_static(&path) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
