use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;

use eon_common::gateway::{GatewayError, Reply, ScanGateway};
use eon_core::{AppState, Document, Element, Outcome, ScanController};
use eon_protocols::HttpGateway;

use crate::backend;

const KNOWN_ID: &str = "5f1c";

fn not_found() -> Response {
    let body = json!({"detail": "Scan non trouvé"});
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}

fn stored_scans_backend() -> Router {
    Router::new()
        .route(
            "/",
            get(|| async {
                axum::Json(json!({
                    "name": "ÉON - Audit Sécurité TPE",
                    "version": "1.0.0",
                    "status": "online",
                    "docs": "/api/docs"
                }))
            }),
        )
        .route(
            "/api/v1/scan/{scan_id}",
            get(|Path(scan_id): Path<String>| async move {
                if scan_id != KNOWN_ID {
                    return not_found();
                }
                axum::Json(json!({
                    "success": true,
                    "scan_id": scan_id,
                    "result": {
                        "scan_id": KNOWN_ID,
                        "domain": "example.com",
                        "platform": "shopify",
                        "timestamp": "2026-10-18T10:00:00",
                        "overall_score": 67,
                        "summary": "Scan en cours...",
                        "modules": [
                            {"module_name": "DNS", "status": "success", "severity": "info",
                             "score": 80, "details": {}, "recommendations": []}
                        ]
                    }
                }))
                .into_response()
            })
            .delete(|Path(scan_id): Path<String>| async move {
                if scan_id != KNOWN_ID {
                    return not_found();
                }
                axum::Json(json!({"success": true, "message": "Scan supprimé"})).into_response()
            }),
        )
        .route(
            "/api/v1/platforms",
            get(|| async {
                axum::Json(json!({
                    "platforms": [
                        "shopify", "wix", "wordpress", "squarespace", "custom", "unknown"
                    ],
                    "total": 6
                }))
            }),
        )
        .route(
            "/api/v1/history",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let limit = params.get("limit").cloned().unwrap_or_default();
                axum::Json(json!({
                    "scans": [{
                        "scan_id": KNOWN_ID,
                        "domain": format!("limit-{limit}.example"),
                        "timestamp": "2026-10-18T10:00:00",
                        "overall_score": 67,
                        "platform": "shopify"
                    }],
                    "total": 1
                }))
            }),
        )
}

async fn setup() -> ScanController<HttpGateway, Document> {
    let addr = backend::serve(stored_scans_backend()).await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    ScanController::new(gateway, Document::new(), Arc::new(AppState::new()))
}

#[tokio::test]
async fn open_stored_scan_renders_it() {
    let ctl = setup().await;

    let outcome = ctl.open_scan(KNOWN_ID).await;

    let Outcome::Displayed(result) = outcome else {
        panic!("expected results, got {outcome:?}");
    };
    assert_eq!(result.domain.as_deref(), Some("example.com"));
    assert_eq!(result.summary.as_deref(), Some("Scan en cours..."));
    assert_eq!(ctl.target().text(Element::OverallScore), "67");
    assert_eq!(ctl.target().text(Element::PlatformDetected), "Plateforme: shopify");
    assert_eq!(ctl.state().current_scan_id().as_deref(), Some(KNOWN_ID));
}

#[tokio::test]
async fn open_unknown_scan_alerts_not_found() {
    let ctl = setup().await;

    let outcome = ctl.open_scan("missing").await;

    assert_eq!(outcome, Outcome::Rejected(String::from("Scan non trouvé")));
    assert_eq!(ctl.target().alerts(), vec!["Erreur: Scan non trouvé"]);
    assert!(!ctl.target().is_visible(Element::LoadingState));
}

#[tokio::test]
async fn deleting_displayed_scan_clears_state() {
    let ctl = setup().await;
    ctl.open_scan(KNOWN_ID).await;

    assert_eq!(ctl.delete_scan(KNOWN_ID).await, Outcome::Deleted);

    assert_eq!(ctl.state().current_scan_id(), None);
    assert!(!ctl.target().is_visible(Element::ResultsSection));
    assert_eq!(ctl.target().alerts(), vec!["Scan supprimé"]);
}

#[tokio::test]
async fn deleting_other_scan_keeps_display() {
    let ctl = setup().await;
    ctl.open_scan(KNOWN_ID).await;

    let outcome = ctl.delete_scan("missing").await;

    assert_eq!(outcome, Outcome::Rejected(String::from("Scan non trouvé")));
    assert_eq!(ctl.state().current_scan_id().as_deref(), Some(KNOWN_ID));
    assert!(ctl.target().is_visible(Element::ResultsSection));
}

#[tokio::test]
async fn platforms_and_history_are_listed() {
    let ctl = setup().await;

    let Ok(Reply::Accepted(platforms)) = ctl.gateway().platforms().await else {
        panic!("platforms not listed");
    };
    assert_eq!(platforms.total, 6);
    assert_eq!(platforms.platforms[0], "shopify");

    let Ok(Reply::Accepted(history)) = ctl.gateway().history(3).await else {
        panic!("history not listed");
    };
    assert_eq!(history.total, 1);
    assert_eq!(history.scans[0].domain, "limit-3.example");
}

#[tokio::test]
async fn service_info_reads_backend_root() {
    let ctl = setup().await;

    let Ok(Reply::Accepted(info)) = ctl.gateway().service_info().await else {
        panic!("service info missing");
    };
    assert_eq!(info.status, "online");
    assert_eq!(info.version, "1.0.0");
}

#[tokio::test]
async fn listing_against_closed_port_is_a_transport_error() {
    let addr = backend::closed_port().await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();

    assert!(matches!(
        gateway.platforms().await,
        Err(GatewayError::Transport(_))
    ));
}
