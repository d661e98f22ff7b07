use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;

use eon_core::document::Scroll;
use eon_core::{AppState, Document, Element, Fragment, Outcome, ScanController, messages};
use eon_protocols::HttpGateway;

use crate::backend::{self, Recorded};

async fn controller_for(router: axum::Router) -> ScanController<HttpGateway, Document> {
    let addr = backend::serve(router).await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    ScanController::new(gateway, Document::new(), Arc::new(AppState::new()))
}

#[tokio::test]
async fn successful_scan_round_trip() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let body = json!({
        "success": true,
        "scan_id": "abc123",
        "result": {"overall_score": 82, "platform": "Shopify", "modules": []}
    });
    let ctl = controller_for(backend::scan_backend(StatusCode::OK, body, recorded.clone())).await;
    ctl.target().fill_form("example.com", true);

    let outcome = ctl.submit().await;

    assert!(matches!(outcome, Outcome::Displayed(_)), "{outcome:?}");
    let doc = ctl.target();
    assert!(doc.is_visible(Element::ResultsSection));
    assert!(!doc.is_visible(Element::LoadingState));
    assert_eq!(doc.text(Element::OverallScore), "82");
    assert_eq!(doc.text(Element::PlatformDetected), "Plateforme: Shopify");
    assert_eq!(doc.content(Element::ModulesResults), vec![Fragment::Placeholder]);
    assert_eq!(doc.scrolls(), vec![Scroll::IntoView(Element::ResultsSection)]);
    assert!(doc.alerts().is_empty());
    assert_eq!(ctl.state().current_scan_id().as_deref(), Some("abc123"));

    let sent = recorded.lock().unwrap().clone();
    assert_eq!(sent, vec![json!({"domain": "example.com", "include_subdomains": true})]);
}

#[tokio::test]
async fn modules_arrive_as_cards_in_order() {
    let body = json!({
        "success": true,
        "scan_id": "s1",
        "result": {
            "overall_score": 55,
            "platform": "wordpress",
            "modules": [
                {"module_name": "DNS", "score": 70, "severity": "medium", "status": "warning",
                 "recommendations": ["Add SPF", "Add DMARC"], "details": {"spf": false}},
                {"module_name": "SSL/TLS", "score": 40, "severity": "unheard-of", "status": "error"}
            ]
        }
    });
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(StatusCode::OK, body, recorded)).await;
    ctl.target().fill_form("blog.example", false);

    ctl.submit().await;

    let content = ctl.target().content(Element::ModulesResults);
    assert_eq!(content.len(), 2);
    let Fragment::Card(dns) = &content[0] else {
        panic!("expected card, got {:?}", content[0]);
    };
    let Fragment::Card(ssl) = &content[1] else {
        panic!("expected card, got {:?}", content[1]);
    };
    assert_eq!(dns.module_name, "DNS");
    assert_eq!(dns.recommendations, vec!["Add SPF", "Add DMARC"]);
    assert_eq!(ssl.module_name, "SSL/TLS");
    assert_eq!(ssl.frame_class, "border-purple-500 bg-purple-950/30");
    assert!(ssl.markup().unwrap().contains("UNHEARD-OF"));
    assert!(!ssl.markup().unwrap().contains(messages::RECOMMENDATIONS_LABEL));
}

#[tokio::test]
async fn validation_error_is_alerted_without_prefix() {
    let body = json!({"detail": [{
        "loc": ["body", "domain"],
        "msg": "Value error, invalid domain",
        "type": "value_error"
    }]});
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(
        StatusCode::UNPROCESSABLE_ENTITY,
        body,
        recorded,
    ))
    .await;
    ctl.target().fill_form("not a domain", false);

    let outcome = ctl.submit().await;

    assert_eq!(outcome, Outcome::Rejected(String::from("Value error, invalid domain")));
    assert_eq!(ctl.target().alerts(), vec!["Erreur: invalid domain"]);
    assert!(!ctl.target().is_visible(Element::LoadingState));
    assert!(!ctl.target().is_visible(Element::ResultsSection));
    assert_eq!(ctl.state().current_scan_id(), None);
}

#[tokio::test]
async fn string_detail_is_alerted_verbatim() {
    let body = json!({"detail": "Erreur lors du scan: DNS resolution failed"});
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(
        StatusCode::INTERNAL_SERVER_ERROR,
        body,
        recorded,
    ))
    .await;

    ctl.submit().await;

    assert_eq!(
        ctl.target().alerts(),
        vec!["Erreur: Erreur lors du scan: DNS resolution failed"]
    );
}

#[tokio::test]
async fn logical_failure_uses_error_field() {
    let body = json!({"success": false, "scan_id": "x", "error": "Domaine injoignable"});
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(StatusCode::OK, body, recorded)).await;

    assert_eq!(
        ctl.submit().await,
        Outcome::Failed(String::from("Domaine injoignable"))
    );
    assert_eq!(ctl.target().alerts(), vec!["Erreur: Domaine injoignable"]);
    assert_eq!(ctl.state().current_scan_id(), None);
}

#[tokio::test]
async fn unreachable_backend_clears_loading() {
    let addr = backend::closed_port().await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    let ctl = ScanController::new(gateway, Document::new(), Arc::new(AppState::new()));
    ctl.target().fill_form("example.com", false);

    assert_eq!(ctl.submit().await, Outcome::Unreachable);
    assert!(!ctl.target().is_visible(Element::LoadingState));
    assert_eq!(
        ctl.target().alerts(),
        vec![format!("Erreur: {}", messages::UNREACHABLE)]
    );
}

#[tokio::test]
async fn non_json_error_body_counts_as_connectivity_failure() {
    let ctl = controller_for(backend::raw_scan_backend(
        StatusCode::BAD_GATEWAY,
        "<html>502 Bad Gateway</html>",
    ))
    .await;

    assert_eq!(ctl.submit().await, Outcome::Unreachable);
    assert!(!ctl.target().is_visible(Element::LoadingState));
}

#[tokio::test]
async fn form_stays_usable_after_failure() {
    let addr = backend::closed_port().await;
    let gateway = HttpGateway::new(&backend::config_for(addr)).unwrap();
    let ctl = ScanController::new(gateway, Document::new(), Arc::new(AppState::new()));

    assert_eq!(ctl.submit().await, Outcome::Unreachable);
    assert_eq!(ctl.submit().await, Outcome::Unreachable);
    assert_eq!(ctl.target().alerts().len(), 2);
}

#[tokio::test]
async fn reset_after_scan_clears_everything() {
    let body = json!({
        "success": true,
        "scan_id": "abc123",
        "result": {"overall_score": 82, "platform": "Shopify", "modules": []}
    });
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(StatusCode::OK, body, recorded)).await;
    ctl.target().fill_form("example.com", true);
    ctl.submit().await;

    ctl.reset_form();

    assert_eq!(ctl.state().current_scan_id(), None);
    assert!(!ctl.target().is_visible(Element::ResultsSection));
    assert!(!ctl.export_pdf());
    assert_eq!(ctl.target().alerts(), vec![messages::NOTHING_TO_EXPORT]);
}

#[tokio::test]
async fn saved_page_contains_rendered_cards() {
    let body = json!({
        "success": true,
        "scan_id": "s2",
        "result": {"overall_score": 91, "platform": "wix", "modules": [
            {"module_name": "Headers", "score": 91, "severity": "low", "status": "success",
             "recommendations": ["Add CSP"]}
        ]}
    });
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let ctl = controller_for(backend::scan_backend(StatusCode::OK, body, recorded)).await;
    ctl.target().fill_form("shop.example", false);
    ctl.submit().await;

    let html = ctl.target().to_html().unwrap();
    assert!(html.contains("✅ Headers"));
    assert!(html.contains("<li>• Add CSP</li>"));
    assert!(html.contains("Plateforme: wix"));
}
