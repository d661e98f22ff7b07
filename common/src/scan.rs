//! # Scan Data Model
//!
//! Mirrors the JSON contract of the audit backend.
//!
//! * [`request`]: what the client sends to start a scan.
//! * [`response`]: the envelope and scored result coming back.
//! * [`module`]: one check inside a result, with its severity and status scales.
//! * [`catalog`]: auxiliary listings (platforms, history, service info).

pub mod catalog;
pub mod module;
pub mod request;
pub mod response;

pub use module::{ModuleResult, Severity, Status};
pub use request::ScanRequest;
pub use response::{ScanResponse, ScanResult};
