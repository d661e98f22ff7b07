use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

const TICK: Duration = Duration::from_millis(100);

/// Starts the loading indicator shown while a request is in flight.
pub fn start(message: &str) -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new_spinner();
    let style: ProgressStyle = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(message.color(colors::TEXT_DEFAULT).to_string());
    pb.enable_steady_tick(TICK);
    pb
}

pub fn scanning_message(domain: &str) -> String {
    if domain.is_empty() {
        return String::from("Waiting for the backend...");
    }
    format!("Auditing {}...", domain.bold().color(colors::ACCENT))
}
