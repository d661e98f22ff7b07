use serde::Serialize;

/// Body of `POST /scan`.
///
/// Built once from the form input and consumed by the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    pub domain: String,
    pub include_subdomains: bool,
}

impl ScanRequest {
    /// Only trims the domain; the backend owns validation.
    pub fn from_form(domain: &str, include_subdomains: bool) -> Self {
        Self {
            domain: domain.trim().to_string(),
            include_subdomains,
        }
    }
}
