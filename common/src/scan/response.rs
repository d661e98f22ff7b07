use serde::Deserialize;

use super::module::ModuleResult;

/// Envelope returned by `POST /scan` and `GET /scan/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(default)]
    pub scan_id: Option<String>,
    #[serde(default)]
    pub result: Option<ScanResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Scored outcome of one scan.
///
/// Only `overall_score`, `platform` and `modules` are required by the views;
/// the remaining fields are shown when the backend provides them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScanResult {
    pub overall_score: f64,
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modules: Vec<ModuleResult>,

    #[serde(default)]
    pub scan_id: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub critical_issues: u32,
    #[serde(default)]
    pub high_issues: u32,
    #[serde(default)]
    pub medium_issues: u32,
    #[serde(default)]
    pub low_issues: u32,
}

impl ScanResult {
    pub fn issue_count(&self) -> u32 {
        self.critical_issues + self.high_issues + self.medium_issues + self.low_issues
    }
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders a JSON number the way a browser would: `82.0` becomes `82`.
pub fn format_score(score: f64) -> String {
    score.to_string()
}
