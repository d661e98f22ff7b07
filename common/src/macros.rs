//! Logging shorthand for positive outcomes.
//!
//! It forwards to `tracing` so the CLI formatter decides how the line looks.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "eon::success", $($arg)*)
    };
}
