use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method and path of every incoming request.
///
/// Headers are never logged; they carry the caller's access token.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("{} {}", request.method(), request.uri().path());

    let response = next.run(request).await;

    tracing::debug!("Responded with {}", response.status());

    response
}
