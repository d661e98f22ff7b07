//! # In-memory Document
//!
//! A [`RenderTarget`] that keeps the display state as plain data. The CLI
//! mirrors it to the terminal and can save it as a standalone HTML page;
//! tests inspect it directly.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cards::html_escape;
use crate::render::{Element, FormInput, Fragment, RenderTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scroll {
    IntoView(Element),
    Top,
}

#[derive(Debug, Clone, Default)]
struct Node {
    text: String,
    visible: bool,
    content: Vec<Fragment>,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: HashMap<Element, Node>,
    form: FormInput,
    alerts: Vec<String>,
    scrolls: Vec<Scroll>,
}

#[derive(Debug)]
pub struct Document {
    inner: Mutex<Inner>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let nodes = Element::ALL
            .iter()
            .map(|element| {
                let node = Node {
                    visible: element.visible_initially(),
                    ..Node::default()
                };
                (*element, node)
            })
            .collect();

        Self {
            inner: Mutex::new(Inner {
                nodes,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fills the scan form, as a user typing into it would.
    pub fn fill_form(&self, domain: &str, include_subdomains: bool) {
        self.lock().form = FormInput {
            domain: domain.to_string(),
            include_subdomains,
        };
    }

    pub fn text(&self, element: Element) -> String {
        self.lock()
            .nodes
            .get(&element)
            .map(|node| node.text.clone())
            .unwrap_or_default()
    }

    pub fn is_visible(&self, element: Element) -> bool {
        self.lock()
            .nodes
            .get(&element)
            .is_some_and(|node| node.visible)
    }

    pub fn content(&self, element: Element) -> Vec<Fragment> {
        self.lock()
            .nodes
            .get(&element)
            .map(|node| node.content.clone())
            .unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn scrolls(&self) -> Vec<Scroll> {
        self.lock().scrolls.clone()
    }

    /// Forgets past alerts and scrolls. Long sessions call it between commands.
    pub fn clear_history(&self) {
        let mut inner = self.lock();
        inner.alerts.clear();
        inner.scrolls.clear();
    }

    /// Standalone page with the current results, or a note when none are shown.
    pub fn to_html(&self) -> Result<String, fmt::Error> {
        let inner = self.lock();
        let mut out = String::with_capacity(16_384);
        write_page(&mut out, &inner)?;
        Ok(out)
    }
}

fn write_page(out: &mut String, inner: &Inner) -> fmt::Result {
    let node = |element: Element| inner.nodes.get(&element).cloned().unwrap_or_default();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="fr">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="utf-8">"#)?;
    writeln!(out, "<title>ÉON - Rapport d'audit</title>")?;
    writeln!(out, r#"<script src="https://cdn.tailwindcss.com"></script>"#)?;
    writeln!(out, "</head>")?;
    writeln!(
        out,
        r#"<body class="bg-slate-950 text-white min-h-screen p-8">"#
    )?;

    let results = node(Element::ResultsSection);
    if !results.visible {
        writeln!(out, r#"<p class="text-purple-300">Aucun résultat à afficher.</p>"#)?;
    } else {
        writeln!(out, r#"<section id="{}">"#, Element::ResultsSection.id())?;
        if !inner.form.domain.is_empty() {
            writeln!(
                out,
                r#"<h2 class="text-2xl font-bold mb-2">{}</h2>"#,
                html_escape(&inner.form.domain)
            )?;
        }
        writeln!(
            out,
            r#"<div id="{}" class="text-6xl font-bold">{}</div>"#,
            Element::OverallScore.id(),
            html_escape(&node(Element::OverallScore).text)
        )?;
        writeln!(
            out,
            r#"<p id="{}" class="text-purple-300 mb-6">{}</p>"#,
            Element::PlatformDetected.id(),
            html_escape(&node(Element::PlatformDetected).text)
        )?;
        writeln!(
            out,
            r#"<div id="{}" class="space-y-4">"#,
            Element::ModulesResults.id()
        )?;
        for fragment in &node(Element::ModulesResults).content {
            fragment.write_markup(out)?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

impl RenderTarget for Document {
    fn form_input(&self) -> FormInput {
        self.lock().form.clone()
    }

    fn reset_form(&self) {
        self.lock().form = FormInput::default();
    }

    fn set_text(&self, element: Element, text: &str) {
        self.lock().nodes.entry(element).or_default().text = text.to_string();
    }

    fn set_visible(&self, element: Element, visible: bool) {
        self.lock().nodes.entry(element).or_default().visible = visible;
    }

    fn replace_content(&self, element: Element, fragments: Vec<Fragment>) {
        self.lock().nodes.entry(element).or_default().content = fragments;
    }

    fn scroll_into_view(&self, element: Element) {
        self.lock().scrolls.push(Scroll::IntoView(element));
    }

    fn scroll_to_top(&self) {
        self.lock().scrolls.push(Scroll::Top);
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
