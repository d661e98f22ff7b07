//! Startup connectivity probe. Purely informational: it logs, never alerts,
//! and nothing waits on it.

use tracing::{info, warn};

use eon_common::gateway::{Reply, ScanGateway};
use eon_common::scan::catalog::ServiceInfo;
use eon_common::success;

use crate::messages;

pub async fn probe<G>(gateway: &G) -> bool
where
    G: ScanGateway + ?Sized,
{
    match gateway.health().await {
        Ok(()) => {
            success!("Backend connected");
            true
        }
        Err(e) => {
            warn!(error = %e, "Backend unavailable");
            info!("{}", messages::BACKEND_HINT);
            false
        }
    }
}

/// Name and version the backend announces at its root. Failures are logged
/// and otherwise ignored.
pub async fn service_info<G>(gateway: &G) -> Option<ServiceInfo>
where
    G: ScanGateway + ?Sized,
{
    match gateway.service_info().await {
        Ok(Reply::Accepted(info)) => Some(info),
        Ok(Reply::Rejected { status, .. }) => {
            warn!(status, "Service info unavailable");
            None
        }
        Err(e) => {
            warn!(error = %e, "Service info unavailable");
            None
        }
    }
}
