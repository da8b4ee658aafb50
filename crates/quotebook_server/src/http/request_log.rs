use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::debug;
use std::time::Instant;

pub(crate) async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().to_string();
    let route = request.uri().path().to_string();

    let response = next.run(request).await;
    debug!(
        "event=http_request module=http method={} route={} status={} duration_ms={}",
        method,
        route,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}
