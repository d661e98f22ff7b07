use std::fmt;

use serde::Deserialize;

use super::response::null_as_empty;

/// Outcome of one backend check (DNS, SSL, headers, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleResult {
    pub module_name: String,
    pub score: f64,
    pub severity: Severity,
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recommendations: Vec<String>,
    /// Free-form analyzer output. Never rendered in cards.
    #[serde(default)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Qualitative risk level of a module finding.
///
/// Values outside the five-level scale are kept verbatim in
/// [`Severity::Unrecognized`] so their label survives, while every lookup
/// treats them as [`Severity::Info`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Unrecognized(String),
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "info" => Severity::Info,
            _ => Severity::Unrecognized(raw),
        }
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        Severity::from(raw.to_string())
    }
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
            Severity::Unrecognized(raw) => raw,
        }
    }

    /// Upper-cased text shown in the badge.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution outcome of a module, independent from its severity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
    Unrecognized(String),
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => Status::Success,
            "warning" => Status::Warning,
            "error" => Status::Error,
            "info" => Status::Info,
            _ => Status::Unrecognized(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::from(raw.to_string())
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
            Status::Info => "info",
            Status::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
