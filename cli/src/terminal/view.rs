//! # Terminal View
//!
//! [`RenderTarget`] for the console. Every call lands in an in-memory
//! [`Document`] first, so the session can be saved as HTML at any time; the
//! console is then updated at the points a browser would repaint.

use std::io::{self, IsTerminal};
use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::*;
use crossterm::{cursor, execute, terminal};
use indicatif::ProgressBar;
use tracing::debug;

use eon_core::render::{Element, FormInput, Fragment, RenderTarget};
use eon_core::{Document, messages};

use crate::terminal::{colors, format, print, spinner};

pub struct TerminalView {
    document: Document,
    quiet: u8,
    loading: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new(quiet: u8) -> Self {
        Self {
            document: Document::new(),
            quiet,
            loading: Mutex::new(None),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn fill_form(&self, domain: &str, include_subdomains: bool) {
        self.document.fill_form(domain, include_subdomains);
    }

    fn loading(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.loading.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_loading(&self) {
        let mut slot = self.loading();
        if slot.is_some() {
            return;
        }
        let domain: String = self.document.form_input().domain.trim().to_string();
        *slot = Some(spinner::start(&spinner::scanning_message(&domain)));
    }

    fn stop_loading(&self) {
        if let Some(pb) = self.loading().take() {
            pb.finish_and_clear();
        }
    }

    /// Prints the results region as it currently stands in the document.
    fn print_results(&self) {
        let doc: &Document = &self.document;
        if !doc.is_visible(Element::ResultsSection) {
            return;
        }

        print::header("audit results", self.quiet);

        let domain: String = doc.form_input().domain;
        if !domain.is_empty() {
            print::aligned_line("Domain", domain.color(colors::ACCENT).bold());
        }
        let score: String = doc.text(Element::OverallScore);
        let score_value: ColoredString = match score.parse::<f64>() {
            Ok(value) => format::score(value),
            Err(_) => score.normal(),
        };
        print::aligned_line("Score", score_value);
        let platform: String = doc.text(Element::PlatformDetected);
        let platform: &str = platform
            .strip_prefix(messages::PLATFORM_LABEL)
            .unwrap_or(&platform);
        print::aligned_line("Platform", platform.to_string());

        if self.quiet == 0 {
            print::header("modules", self.quiet);
        } else {
            crate::eon_print!();
        }

        let fragments: Vec<Fragment> = doc.content(Element::ModulesResults);
        let last: usize = fragments.len();
        for (idx, fragment) in fragments.iter().enumerate() {
            print_fragment(idx, fragment);
            if idx + 1 != last {
                crate::eon_print!();
            }
        }
    }
}

fn print_fragment(idx: usize, fragment: &Fragment) {
    match fragment {
        Fragment::Card(card) => {
            print::tree_head(idx, &format!("{} {}", card.icon, card.module_name));
            print::as_tree_one_level(format::card_to_detail(card));
            if !card.recommendations.is_empty() {
                print::print(&format!(
                    "   {}",
                    messages::RECOMMENDATIONS_LABEL.color(colors::SECONDARY)
                ));
                print::bullets(&card.recommendations);
            }
        }
        Fragment::Placeholder => {
            print::centerln(&format!("{}", messages::PLACEHOLDER_TITLE.color(colors::SECONDARY)));
            print::centerln(&format!("{}", messages::PLACEHOLDER_NOTE.dimmed()));
        }
    }
}

impl RenderTarget for TerminalView {
    fn form_input(&self) -> FormInput {
        self.document.form_input()
    }

    fn reset_form(&self) {
        self.document.reset_form();
    }

    fn set_text(&self, element: Element, text: &str) {
        self.document.set_text(element, text);
    }

    fn set_visible(&self, element: Element, visible: bool) {
        self.document.set_visible(element, visible);
        if element == Element::LoadingState {
            if visible {
                self.start_loading();
            } else {
                self.stop_loading();
            }
        }
    }

    fn replace_content(&self, element: Element, fragments: Vec<Fragment>) {
        self.document.replace_content(element, fragments);
    }

    fn scroll_into_view(&self, element: Element) {
        self.document.scroll_into_view(element);
        if element == Element::ResultsSection {
            self.print_results();
        }
    }

    fn scroll_to_top(&self) {
        self.document.scroll_to_top();
        let mut stdout = io::stdout();
        if stdout.is_terminal() {
            let cleared = execute!(
                stdout,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            );
            if let Err(e) = cleared {
                debug!(error = %e, "could not clear the screen");
            }
        }
    }

    fn alert(&self, message: &str) {
        self.document.alert(message);
        self.stop_loading();
        print::alert(message);
    }
}
