//! In-process HTTP server shared by the integration tests.

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, Method};
use axum::response::{Html, IntoResponse};
use axum::routing::{any, get};
use axum::Router;

/// How long `/slow` waits before answering
pub const SLOW_SECS: u64 = 3;

async fn echo(method: Method, body: Bytes) -> String {
    format!("{} {}", method, String::from_utf8_lossy(&body))
}

async fn json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], r#"{"a":1,"b":2}"#)
}

async fn repeated_headers() -> impl IntoResponse {
    axum::http::Response::builder()
        .header("content-type", "application/json")
        .header("x-custom", "1")
        .header("x-custom", "2")
        .body(Body::from("{}"))
        .unwrap()
}

async fn broken_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "not json")
}

async fn page() -> Html<&'static str> {
    Html("<html><body><p>hi</p></body></html>")
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(SLOW_SECS)).await;
    "finally"
}

/// Start the server on a random local port and return its base URL
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/echo", any(echo))
        .route("/json", get(json))
        .route("/headers", get(repeated_headers))
        .route("/broken", get(broken_json))
        .route("/page", get(page))
        .route("/slow", get(slow));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
