use std::path::Path;

use anyhow::Context;
use colored::*;

use eon_common::config::Config;
use eon_common::scan::ScanResult;
use eon_core::Outcome;

use crate::commands::Controller;
use crate::terminal::{colors, print};

pub async fn scan(
    controller: &Controller,
    domain: &str,
    include_subdomains: bool,
    cfg: &Config,
) -> Outcome {
    controller.target().fill_form(domain, include_subdomains);
    let outcome: Outcome = controller.submit().await;
    finish(&outcome, cfg);
    outcome
}

pub async fn show(controller: &Controller, scan_id: &str, cfg: &Config) -> Outcome {
    let outcome: Outcome = controller.open_scan(scan_id).await;
    finish(&outcome, cfg);
    outcome
}

pub async fn delete(controller: &Controller, scan_id: &str) -> Outcome {
    controller.delete_scan(scan_id).await
}

pub fn save_html(controller: &Controller, path: &Path) -> anyhow::Result<()> {
    let html: String = controller.target().document().to_html()?;
    std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    print::print_status(format!("Report saved to {}", path.display()));
    Ok(())
}

fn finish(outcome: &Outcome, cfg: &Config) {
    if let Outcome::Displayed(result) = outcome {
        print_summary(result, cfg);
    }
}

/// Fields of the result the module view does not carry.
fn print_summary(result: &ScanResult, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let mut details: Vec<(String, ColoredString)> = Vec::new();
    if let Some(scan_id) = &result.scan_id {
        details.push((String::from("Scan ID"), scan_id.color(colors::ACCENT)));
    }
    if let Some(timestamp) = &result.timestamp {
        details.push((String::from("Date"), timestamp.normal()));
    }
    if let Some(summary) = &result.summary {
        details.push((String::from("Summary"), summary.normal()));
    }
    if result.issue_count() > 0 {
        let issues: String = format!(
            "{} critical, {} high, {} medium, {} low",
            result.critical_issues, result.high_issues, result.medium_issues, result.low_issues
        );
        details.push((String::from("Issues"), issues.yellow()));
    }

    if details.is_empty() {
        return;
    }

    crate::eon_print!();
    print::tree_head(result.modules.len(), "Summary");
    print::as_tree_one_level(details);
    if cfg.quiet == 0 {
        print::fat_separator();
    }
}
