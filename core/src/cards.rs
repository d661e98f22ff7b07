//! # Module Cards
//!
//! Pure transformation of a [`ModuleResult`] into a display card, plus the
//! HTML markup of that card. The style lookups are exhaustive matches with
//! `info` as the fallback for anything outside the known scales.

use std::fmt::{self, Write};

use eon_common::scan::response::format_score;
use eon_common::scan::{ModuleResult, Severity, Status};

use crate::messages;

/// Everything needed to draw one module, already resolved from lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleCard {
    pub icon: &'static str,
    pub module_name: String,
    pub score: f64,
    pub severity: Severity,
    pub frame_class: &'static str,
    pub badge_class: &'static str,
    pub recommendations: Vec<String>,
}

impl From<&ModuleResult> for ModuleCard {
    fn from(module: &ModuleResult) -> Self {
        Self {
            icon: status_icon(&module.status),
            module_name: module.module_name.clone(),
            score: module.score,
            severity: module.severity.clone(),
            frame_class: frame_class(&module.severity),
            badge_class: badge_class(&module.severity),
            recommendations: module.recommendations.clone(),
        }
    }
}

impl ModuleCard {
    /// "Score: X/100"
    pub fn score_line(&self) -> String {
        format!("Score: {}/100", format_score(self.score))
    }

    pub fn markup(&self) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(1024);
        self.write_markup(&mut out)?;
        Ok(out)
    }

    pub fn write_markup(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            r#"<div class="border {} rounded-lg p-6 backdrop-blur-sm">"#,
            self.frame_class
        )?;
        writeln!(out, r#"  <div class="flex items-start justify-between mb-4">"#)?;
        writeln!(out, "    <div>")?;
        writeln!(
            out,
            r#"      <h4 class="text-lg font-semibold flex items-center gap-2">{} {}</h4>"#,
            self.icon,
            html_escape(&self.module_name)
        )?;
        writeln!(
            out,
            r#"      <p class="text-sm text-purple-300 mt-1">{}</p>"#,
            self.score_line()
        )?;
        writeln!(out, "    </div>")?;
        writeln!(
            out,
            r#"    <span class="px-3 py-1 rounded-full text-xs font-semibold {}">{}</span>"#,
            self.badge_class,
            html_escape(&self.severity.label())
        )?;
        writeln!(out, "  </div>")?;

        if !self.recommendations.is_empty() {
            writeln!(out, r#"  <div class="mt-4">"#)?;
            writeln!(
                out,
                r#"    <p class="text-sm font-semibold mb-2 text-purple-200">{}</p>"#,
                messages::RECOMMENDATIONS_LABEL
            )?;
            writeln!(out, r#"    <ul class="space-y-1 text-sm text-purple-300">"#)?;
            for rec in &self.recommendations {
                writeln!(out, "      <li>• {}</li>", html_escape(rec))?;
            }
            writeln!(out, "    </ul>")?;
            writeln!(out, "  </div>")?;
        }

        writeln!(out, "</div>")
    }
}

/// Renders one module straight to markup.
pub fn module_card_markup(module: &ModuleResult) -> Result<String, fmt::Error> {
    ModuleCard::from(module).markup()
}

pub fn placeholder_markup() -> String {
    format!(
        concat!(
            r#"<div class="text-center py-8 text-purple-300">"#,
            "\n  <p>{}</p>\n",
            r#"  <p class="text-sm mt-2">{}</p>"#,
            "\n</div>\n"
        ),
        messages::PLACEHOLDER_TITLE,
        messages::PLACEHOLDER_NOTE
    )
}

/// Border and background of the card frame.
pub fn frame_class(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "border-red-500 bg-red-950/30",
        Severity::High => "border-orange-500 bg-orange-950/30",
        Severity::Medium => "border-yellow-500 bg-yellow-950/30",
        Severity::Low => "border-blue-500 bg-blue-950/30",
        Severity::Info | Severity::Unrecognized(_) => "border-purple-500 bg-purple-950/30",
    }
}

pub fn badge_class(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-red-600 text-white",
        Severity::High => "bg-orange-600 text-white",
        Severity::Medium => "bg-yellow-600 text-black",
        Severity::Low => "bg-blue-600 text-white",
        Severity::Info | Severity::Unrecognized(_) => "bg-purple-600 text-white",
    }
}

pub fn status_icon(status: &Status) -> &'static str {
    match status {
        Status::Success => "✅",
        Status::Warning => "⚠️",
        Status::Error => "❌",
        Status::Info | Status::Unrecognized(_) => "ℹ️",
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
