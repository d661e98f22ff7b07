//! Terminal counterparts of the card styles: one color per severity, with the
//! same `info` fallback as the HTML view.

use colored::*;
use eon_common::scan::Severity;
use eon_common::scan::response::format_score;
use eon_core::cards::ModuleCard;

pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
        Severity::Info | Severity::Unrecognized(_) => Color::Magenta,
    }
}

/// Overall score colored by band.
pub fn score(score: f64) -> ColoredString {
    let text: String = format!("{}/100", format_score(score));
    match score {
        s if s >= 80.0 => text.green().bold(),
        s if s >= 50.0 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

pub fn card_to_detail(card: &ModuleCard) -> Vec<(String, ColoredString)> {
    let color: Color = severity_color(&card.severity);
    vec![
        (
            String::from("Score"),
            format!("{}/100", format_score(card.score)).color(color),
        ),
        (
            String::from("Severity"),
            card.severity.label().color(color).bold(),
        ),
    ]
}
