use serde::Deserialize;

use super::response::null_as_empty;

/// `GET /platforms`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub total: usize,
}

/// `GET /history`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct History {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scans: Vec<HistoryItem>,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryItem {
    pub scan_id: String,
    pub domain: String,
    pub timestamp: String,
    pub overall_score: f64,
    pub platform: String,
}

/// `DELETE /scan/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deletion {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /` on the backend root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    #[serde(default)]
    pub docs: Option<String>,
}
