use std::net::Ipv6Addr;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme used to reach the backend (`http` or `https`).
    pub scheme: String,
    /// Host serving the audit backend.
    pub host: String,
    pub port: u16,
    /// Suppresses the banner.
    pub no_banner: bool,
    /// 0 = full output, 1 = no headers, 2 = results only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: String::from("http"),
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            no_banner: false,
            quiet: 0,
        }
    }
}

impl Config {
    /// Base of every versioned endpoint, e.g. `http://localhost:8000/api/v1`.
    pub fn api_base(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.url_host(), self.port, API_PREFIX)
    }

    /// The host as it must appear in a URL: IPv6 literals go in brackets.
    fn url_host(&self) -> String {
        match self.host.parse::<Ipv6Addr>() {
            Ok(addr) => format!("[{addr}]"),
            Err(_) => self.host.clone(),
        }
    }

    /// The api base with its version prefix removed.
    pub fn root_url(&self) -> String {
        let base = self.api_base();
        match base.strip_suffix(API_PREFIX) {
            Some(root) => root.to_string(),
            None => base,
        }
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.root_url())
    }
}
