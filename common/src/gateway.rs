//! # Backend Gateway Port
//!
//! The controller never talks HTTP itself. It depends on [`ScanGateway`], which
//! the `eon-protocols` crate implements over reqwest and tests replace with
//! scripted fakes.
//!
//! Every call distinguishes three outcomes:
//! * `Ok(Reply::Accepted(_))`: a 2xx response whose body parsed.
//! * `Ok(Reply::Rejected { .. })`: a non-2xx response with a JSON body.
//! * `Err(GatewayError)`: the exchange itself failed (unreachable host,
//!   malformed JSON, ...).

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::scan::catalog::{Deletion, History, PlatformList, ServiceInfo};
use crate::scan::{ScanRequest, ScanResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Accepted(T),
    /// The backend refused the call. `detail` is the human-readable part of
    /// its error body, when one could be found.
    Rejected {
        status: u16,
        detail: Option<String>,
    },
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("unexpected status {0}")]
    Status(u16),
}

#[async_trait]
pub trait ScanGateway: Send + Sync {
    async fn submit_scan(
        &self,
        request: &ScanRequest,
    ) -> Result<Reply<ScanResponse>, GatewayError>;

    async fn fetch_scan(&self, scan_id: &str) -> Result<Reply<ScanResponse>, GatewayError>;

    async fn delete_scan(&self, scan_id: &str) -> Result<Reply<Deletion>, GatewayError>;

    async fn platforms(&self) -> Result<Reply<PlatformList>, GatewayError>;

    async fn history(&self, limit: u32) -> Result<Reply<History>, GatewayError>;

    async fn service_info(&self) -> Result<Reply<ServiceInfo>, GatewayError>;

    /// Succeeds on any 2xx from the health endpoint. The body is ignored.
    async fn health(&self) -> Result<(), GatewayError>;
}

#[async_trait]
impl<T: ScanGateway + ?Sized> ScanGateway for Arc<T> {
    async fn submit_scan(
        &self,
        request: &ScanRequest,
    ) -> Result<Reply<ScanResponse>, GatewayError> {
        (**self).submit_scan(request).await
    }

    async fn fetch_scan(&self, scan_id: &str) -> Result<Reply<ScanResponse>, GatewayError> {
        (**self).fetch_scan(scan_id).await
    }

    async fn delete_scan(&self, scan_id: &str) -> Result<Reply<Deletion>, GatewayError> {
        (**self).delete_scan(scan_id).await
    }

    async fn platforms(&self) -> Result<Reply<PlatformList>, GatewayError> {
        (**self).platforms().await
    }

    async fn history(&self, limit: u32) -> Result<Reply<History>, GatewayError> {
        (**self).history(limit).await
    }

    async fn service_info(&self) -> Result<Reply<ServiceInfo>, GatewayError> {
        (**self).service_info().await
    }

    async fn health(&self) -> Result<(), GatewayError> {
        (**self).health().await
    }
}
