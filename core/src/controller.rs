//! # Scan Controller
//!
//! Binds a form submission to a backend call and walks the display through
//! its three states: idle, loading, and result or error.
//!
//! Overlapping requests resolve as *last request wins*: every tracked call
//! takes a ticket from [`AppState`], and a reply whose ticket has been
//! superseded is dropped without touching the display or the state.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, info};

use eon_common::gateway::{GatewayError, Reply, ScanGateway};
use eon_common::scan::catalog::{History, PlatformList};
use eon_common::scan::response::format_score;
use eon_common::scan::{ScanRequest, ScanResponse, ScanResult};

use crate::cards::ModuleCard;
use crate::messages;
use crate::render::{Element, Fragment, RenderTarget};
use crate::state::{AppState, Ticket};

/// How a controller operation ended, once the display has been updated.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Results are on display. Carries the full result for callers that
    /// want the fields the display does not show.
    Displayed(Box<ScanResult>),
    Deleted,
    /// The backend refused the request (non-2xx).
    Rejected(String),
    /// The backend answered `success: false`.
    Failed(String),
    /// The exchange itself failed.
    Unreachable,
    /// A newer request superseded this one; its reply was ignored.
    Stale,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Displayed(_) | Outcome::Deleted)
    }
}

pub struct ScanController<G, R> {
    gateway: G,
    target: R,
    state: Arc<AppState>,
}

/// Hides the loading indicator when dropped, unless a newer request owns it.
struct LoadingGuard<'a, R: RenderTarget> {
    target: &'a R,
    state: &'a AppState,
    ticket: Ticket,
}

impl<R: RenderTarget> Drop for LoadingGuard<'_, R> {
    fn drop(&mut self) {
        if self.state.is_latest(self.ticket) {
            hide_loading(self.target);
        }
    }
}

fn hide_loading<R: RenderTarget>(target: &R) {
    target.set_visible(Element::LoadingState, false);
}

impl<G, R> ScanController<G, R>
where
    G: ScanGateway,
    R: RenderTarget,
{
    pub fn new(gateway: G, target: R, state: Arc<AppState>) -> Self {
        Self {
            gateway,
            target,
            state,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reads the form, sends the scan and renders whatever comes back.
    pub async fn submit(&self) -> Outcome {
        let form = self.target.form_input();
        let request = ScanRequest::from_form(&form.domain, form.include_subdomains);
        debug!(
            domain = %request.domain,
            include_subdomains = request.include_subdomains,
            "scan submitted"
        );

        self.track(self.gateway.submit_scan(&request)).await
    }

    /// Loads a previously stored scan and renders it like a fresh one.
    pub async fn open_scan(&self, scan_id: &str) -> Outcome {
        self.track(self.gateway.fetch_scan(scan_id)).await
    }

    pub async fn delete_scan(&self, scan_id: &str) -> Outcome {
        match self.gateway.delete_scan(scan_id).await {
            Ok(Reply::Accepted(deletion)) if deletion.success => {
                if self.state.current_scan_id().as_deref() == Some(scan_id) {
                    self.reset_form();
                }
                let message = deletion
                    .message
                    .unwrap_or_else(|| messages::SCAN_DELETED.to_string());
                self.target.alert(&message);
                Outcome::Deleted
            }
            Ok(Reply::Accepted(deletion)) => {
                let message = deletion
                    .message
                    .unwrap_or_else(|| messages::DELETE_FAILED.to_string());
                self.show_error(&message);
                Outcome::Failed(message)
            }
            Ok(Reply::Rejected { status, detail }) => {
                debug!(status, "deletion rejected");
                let message = detail.unwrap_or_else(|| messages::DELETE_FAILED.to_string());
                self.show_error(&message);
                Outcome::Rejected(message)
            }
            Err(e) => self.unreachable(&e),
        }
    }

    pub async fn platforms(&self) -> Option<PlatformList> {
        self.listing(self.gateway.platforms().await)
    }

    pub async fn history(&self, limit: u32) -> Option<History> {
        self.listing(self.gateway.history(limit).await)
    }

    /// Routes a failed listing through the same alerts as a failed scan.
    fn listing<T>(&self, reply: Result<Reply<T>, GatewayError>) -> Option<T> {
        match reply {
            Ok(Reply::Accepted(value)) => Some(value),
            Ok(Reply::Rejected { status, detail }) => {
                debug!(status, "listing rejected");
                self.show_error(detail.as_deref().unwrap_or(messages::LISTING_FAILED));
                None
            }
            Err(e) => {
                self.unreachable(&e);
                None
            }
        }
    }

    async fn track<F>(&self, call: F) -> Outcome
    where
        F: Future<Output = Result<Reply<ScanResponse>, GatewayError>>,
    {
        let ticket = self.state.issue_ticket();
        let _loading = self.show_loading(ticket);

        let reply = call.await;

        if !self.state.is_latest(ticket) {
            debug!(?ticket, "discarding superseded reply");
            return Outcome::Stale;
        }
        self.settle(reply)
    }

    fn settle(&self, reply: Result<Reply<ScanResponse>, GatewayError>) -> Outcome {
        let response = match reply {
            Ok(Reply::Accepted(response)) => response,
            Ok(Reply::Rejected { status, detail }) => {
                debug!(status, "scan rejected");
                let message = detail.unwrap_or_else(|| messages::SCAN_FAILED.to_string());
                self.show_error(&message);
                return Outcome::Rejected(message);
            }
            Err(e) => return self.unreachable(&e),
        };

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| messages::SCAN_FAILED.to_string());
            self.show_error(&message);
            return Outcome::Failed(message);
        }

        match response.result {
            Some(result) => {
                let scan_id = response.scan_id.or_else(|| result.scan_id.clone());
                self.state.record_scan(scan_id);
                self.display_results(&result);
                Outcome::Displayed(Box::new(result))
            }
            None => self.unreachable(&GatewayError::Decode(String::from(
                "successful reply without result",
            ))),
        }
    }

    fn unreachable(&self, err: &GatewayError) -> Outcome {
        error!(error = %err, "backend exchange failed");
        self.show_error(messages::UNREACHABLE);
        Outcome::Unreachable
    }

    /// Shows the results region with the score, platform and one card per module.
    pub fn display_results(&self, result: &ScanResult) {
        self.target.set_visible(Element::ResultsSection, true);
        self.target
            .set_text(Element::OverallScore, &format_score(result.overall_score));
        self.target.set_text(
            Element::PlatformDetected,
            &format!("{}{}", messages::PLATFORM_LABEL, result.platform),
        );

        let fragments: Vec<Fragment> = if result.modules.is_empty() {
            vec![Fragment::Placeholder]
        } else {
            result
                .modules
                .iter()
                .map(|module| Fragment::Card(ModuleCard::from(module)))
                .collect()
        };
        self.target.replace_content(Element::ModulesResults, fragments);

        self.target.scroll_into_view(Element::ResultsSection);
    }

    fn show_loading(&self, ticket: Ticket) -> LoadingGuard<'_, R> {
        self.target.set_visible(Element::LoadingState, true);
        self.target.set_visible(Element::ResultsSection, false);
        LoadingGuard {
            target: &self.target,
            state: &self.state,
            ticket,
        }
    }

    /// Hides the loading indicator, leaving the results region as it is.
    pub fn hide_loading(&self) {
        hide_loading(&self.target);
    }

    pub fn show_error(&self, message: &str) {
        let clean = strip_validation_prefix(message);
        self.target
            .alert(&format!("{}{}", messages::ERROR_PREFIX, clean));
    }

    pub fn reset_form(&self) {
        self.target.reset_form();
        self.target.set_visible(Element::ResultsSection, false);
        self.state.clear();
        self.target.scroll_to_top();
    }

    /// Returns whether there was a scan to export. No file is produced yet.
    pub fn export_pdf(&self) -> bool {
        let Some(scan_id) = self.state.current_scan_id() else {
            self.target.alert(messages::NOTHING_TO_EXPORT);
            return false;
        };
        self.target.alert(messages::EXPORT_PENDING);
        info!(scan_id = %scan_id, "PDF export requested");
        true
    }
}

/// Removes the "Value error, " prefix the backend validator puts on messages.
pub fn strip_validation_prefix(message: &str) -> &str {
    const PREFIX: &str = "value error,";

    match message.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => message[PREFIX.len()..].trim_start(),
        _ => message,
    }
}
