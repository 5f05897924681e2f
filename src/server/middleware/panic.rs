use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use crate::model::api::ErrorDto;

/// Turns a panic inside a handler into the standard 500 error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("Request handler panicked: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(
            ErrorDto::new("Internal server error")
                .with_details(serde_json::Value::String(details)),
        ),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn static_panic() -> &'static str {
        panic!("boom")
    }

    async fn formatted_panic() -> &'static str {
        let id = 7;
        panic!("channel {} vanished", id)
    }

    fn app() -> Router {
        Router::new()
            .route("/static", get(static_panic))
            .route("/formatted", get(formatted_panic))
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    #[tokio::test]
    async fn panic_message_becomes_error_details() {
        let (status, body) = call(app(), "/static").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error", "details": "boom" }));
    }

    #[tokio::test]
    async fn formatted_panic_message_is_kept() {
        let (status, body) = call(app(), "/formatted").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "channel 7 vanished");
    }
}
