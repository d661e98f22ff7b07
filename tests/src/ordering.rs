use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::routing::post;
use serde_json::{Value, json};

use eon_core::{AppState, Document, Element, Outcome, ScanController};
use eon_protocols::HttpGateway;

use crate::backend::{self, Recorded};

/// Scans of `slow.example` take a while; everything else answers at once.
/// The scan id echoes the domain so replies can be told apart.
fn staggered_backend(recorded: Recorded) -> Router {
    Router::new().route(
        "/api/v1/scan",
        post(move |axum::Json(request): axum::Json<Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().expect("recorded lock").push(request.clone());
                let domain = request["domain"].as_str().unwrap_or_default().to_string();
                if domain == "slow.example" {
                    tokio::time::sleep(Duration::from_millis(400)).await;
                }
                let score = if domain == "slow.example" { 10 } else { 90 };
                axum::Json(json!({
                    "success": true,
                    "scan_id": domain,
                    "result": {"overall_score": score, "platform": "custom", "modules": []}
                }))
            }
        }),
    )
}

async fn wait_for_requests(recorded: &Recorded, count: usize) {
    for _ in 0..200 {
        if recorded.lock().unwrap().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("backend never received {count} requests");
}

#[tokio::test]
async fn latest_submission_wins_over_slower_earlier_one() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let addr = backend::serve(staggered_backend(recorded.clone())).await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    let ctl = Arc::new(ScanController::new(
        gateway,
        Document::new(),
        Arc::new(AppState::new()),
    ));

    ctl.target().fill_form("slow.example", false);
    let first = tokio::spawn({
        let ctl = ctl.clone();
        async move { ctl.submit().await }
    });
    wait_for_requests(&recorded, 1).await;

    ctl.target().fill_form("fast.example", false);
    let second = ctl.submit().await;

    assert!(matches!(second, Outcome::Displayed(_)));
    // The slow request is still running: its spinner slot now belongs to nobody.
    assert!(!ctl.target().is_visible(Element::LoadingState));

    let first = first.await.unwrap();
    assert_eq!(first, Outcome::Stale);

    assert_eq!(ctl.state().current_scan_id().as_deref(), Some("fast.example"));
    assert_eq!(ctl.target().text(Element::OverallScore), "90");
    assert!(ctl.target().is_visible(Element::ResultsSection));
    assert!(!ctl.target().is_visible(Element::LoadingState));
    assert!(ctl.target().alerts().is_empty());
}

#[tokio::test]
async fn sequential_submissions_each_render() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let addr = backend::serve(staggered_backend(recorded.clone())).await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    let ctl = ScanController::new(gateway, Document::new(), Arc::new(AppState::new()));

    ctl.target().fill_form("slow.example", false);
    assert!(ctl.submit().await.is_success());
    assert_eq!(ctl.target().text(Element::OverallScore), "10");

    ctl.target().fill_form("other.example", true);
    assert!(ctl.submit().await.is_success());
    assert_eq!(ctl.target().text(Element::OverallScore), "90");
    assert_eq!(ctl.state().current_scan_id().as_deref(), Some("other.example"));
    assert_eq!(recorded.lock().unwrap().len(), 2);
}
