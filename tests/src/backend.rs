//! A stand-in for the audit backend, served by axum on an ephemeral port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::Value;
use tokio::net::TcpListener;

use eon_common::config::Config;

/// Request bodies received by the fake, in arrival order.
pub type Recorded = Arc<Mutex<Vec<Value>>>;

pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("fake backend address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe socket");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..Config::default()
    }
}

/// `/health` answering `status` and `POST /api/v1/scan` answering `body`
/// with `scan_status`, recording every scan request.
pub fn scan_backend(scan_status: StatusCode, body: Value, recorded: Recorded) -> Router {
    Router::new()
        .route("/health", get(|| async { axum::Json(serde_json::json!({"status": "healthy"})) }))
        .route(
            "/api/v1/scan",
            post(move |axum::Json(request): axum::Json<Value>| {
                let body = body.clone();
                let recorded = recorded.clone();
                async move {
                    recorded.lock().expect("recorded lock").push(request);
                    (scan_status, axum::Json(body))
                }
            }),
        )
}

/// `POST /api/v1/scan` answering a raw, non-JSON body.
pub fn raw_scan_backend(scan_status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/v1/scan",
        post(move || async move { (scan_status, body).into_response() }),
    )
}

pub fn health_backend(status: StatusCode) -> Router {
    Router::new().route("/health", get(move || async move { status }))
}
