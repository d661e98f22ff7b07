//! # ÉON Core
//!
//! Client-side orchestration of an audit scan.
//!
//! * **[`controller`]**: submission handling, UI state transitions and error routing.
//! * **[`cards`]**: pure rendering of module results into display fragments.
//! * **[`render`]**: the capability set a display must offer ([`render::RenderTarget`]).
//! * **[`document`]**: an in-memory display, also able to export a standalone HTML page.
//! * **[`state`]**: the application state surviving across operations.
//! * **[`health`]**: the informational startup probe.

pub mod cards;
pub mod controller;
pub mod document;
pub mod health;
pub mod messages;
pub mod render;
pub mod state;

pub use controller::{Outcome, ScanController};
pub use document::Document;
pub use render::{Element, FormInput, Fragment, RenderTarget};
pub use state::AppState;
