//! HTTP side of the ÉON backend contract.

pub mod detail;
pub mod http;

pub use http::HttpGateway;
