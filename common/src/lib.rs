//! # ÉON Common
//!
//! Types shared by every crate of the workspace:
//!
//! * **[`scan`]**: the data model exchanged with the audit backend.
//! * **[`gateway`]**: the port through which the controller reaches the backend.
//! * **[`config`]**: runtime configuration assembled by the CLI.

pub mod config;
pub mod gateway;
pub mod macros;
pub mod scan;

#[doc(hidden)]
pub use tracing;
