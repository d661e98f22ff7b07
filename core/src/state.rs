use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one tracked request. Later requests get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// State that outlives a single request/response cycle.
///
/// `current_scan_id` is only ever written through [`AppState::record_scan`] and
/// [`AppState::clear`], both driven by the controller.
#[derive(Debug, Default)]
pub struct AppState {
    current_scan_id: Mutex<Option<String>>,
    latest: AtomicU64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_scan_id(&self) -> Option<String> {
        self.current_scan_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn record_scan(&self, scan_id: Option<String>) {
        *self
            .current_scan_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = scan_id;
    }

    pub(crate) fn clear(&self) {
        self.record_scan(None);
    }

    /// Hands out a ticket that supersedes every ticket issued before it.
    pub(crate) fn issue_ticket(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub(crate) fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
