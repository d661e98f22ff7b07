//! # HTTP Gateway
//!
//! [`ScanGateway`] over reqwest. One attempt per call: no retry, no timeout.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use eon_common::config::Config;
use eon_common::gateway::{GatewayError, Reply, ScanGateway};
use eon_common::scan::catalog::{Deletion, History, PlatformList, ServiceInfo};
use eon_common::scan::{ScanRequest, ScanResponse};

use crate::detail;

const USER_AGENT: &str = concat!("eon/", env!("CARGO_PKG_VERSION"));

pub struct HttpGateway {
    client: Client,
    api_base: Url,
    root: Url,
    health: Url,
}

impl HttpGateway {
    pub fn new(cfg: &Config) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_base: parse_url(&cfg.api_base())?,
            root: parse_url(&cfg.root_url())?,
            health: parse_url(&cfg.health_url())?,
        })
    }

    /// Appends `segments` to the api base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Reply<T>, GatewayError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        debug!(status = status.as_u16(), bytes = body.len(), "backend replied");

        if !status.is_success() {
            let error_body: Value = serde_json::from_slice(&body).map_err(decode)?;
            return Ok(Reply::Rejected {
                status: status.as_u16(),
                detail: detail::message(&error_body),
            });
        }

        let parsed: T = serde_json::from_slice(&body).map_err(decode)?;
        Ok(Reply::Accepted(parsed))
    }
}

#[async_trait]
impl ScanGateway for HttpGateway {
    async fn submit_scan(
        &self,
        request: &ScanRequest,
    ) -> Result<Reply<ScanResponse>, GatewayError> {
        let url = self.endpoint(&["scan"])?;
        debug!(%url, domain = %request.domain, "submitting scan");
        self.exchange(self.client.post(url).json(request)).await
    }

    async fn fetch_scan(&self, scan_id: &str) -> Result<Reply<ScanResponse>, GatewayError> {
        let url = self.endpoint(&["scan", scan_id])?;
        self.exchange(self.client.get(url)).await
    }

    async fn delete_scan(&self, scan_id: &str) -> Result<Reply<Deletion>, GatewayError> {
        let url = self.endpoint(&["scan", scan_id])?;
        self.exchange(self.client.delete(url)).await
    }

    async fn platforms(&self) -> Result<Reply<PlatformList>, GatewayError> {
        let url = self.endpoint(&["platforms"])?;
        self.exchange(self.client.get(url)).await
    }

    async fn history(&self, limit: u32) -> Result<Reply<History>, GatewayError> {
        let url = self.endpoint(&["history"])?;
        self.exchange(self.client.get(url).query(&[("limit", limit)])).await
    }

    async fn service_info(&self) -> Result<Reply<ServiceInfo>, GatewayError> {
        self.exchange(self.client.get(self.root.clone())).await
    }

    async fn health(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .get(self.health.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Status(status.as_u16()))
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, GatewayError> {
    Url::parse(raw).map_err(|e| GatewayError::InvalidUrl(format!("{raw}: {e}")))
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

fn decode(err: serde_json::Error) -> GatewayError {
    GatewayError::Decode(err.to_string())
}
