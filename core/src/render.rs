//! # Rendering Target
//!
//! The controller only needs a handful of display capabilities: write a text,
//! toggle visibility, replace a region's content, scroll, reset the form and
//! raise a blocking notice. [`RenderTarget`] names exactly those, so the same
//! controller drives the terminal view and the in-memory [`crate::Document`].

use std::fmt::{self, Write};

use crate::cards::ModuleCard;

/// Display elements the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    ScanForm,
    Domain,
    IncludeSubdomains,
    LoadingState,
    ResultsSection,
    OverallScore,
    PlatformDetected,
    ModulesResults,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::ScanForm,
        Element::Domain,
        Element::IncludeSubdomains,
        Element::LoadingState,
        Element::ResultsSection,
        Element::OverallScore,
        Element::PlatformDetected,
        Element::ModulesResults,
    ];

    /// Identifier of the element in the HTML page.
    pub fn id(&self) -> &'static str {
        match self {
            Element::ScanForm => "scanForm",
            Element::Domain => "domain",
            Element::IncludeSubdomains => "includeSubdomains",
            Element::LoadingState => "loadingState",
            Element::ResultsSection => "resultsSection",
            Element::OverallScore => "overallScore",
            Element::PlatformDetected => "platformDetected",
            Element::ModulesResults => "modulesResults",
        }
    }

    /// Whether the element is shown before anything happened.
    pub fn visible_initially(&self) -> bool {
        !matches!(self, Element::LoadingState | Element::ResultsSection)
    }
}

/// Values of the scan form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub domain: String,
    pub include_subdomains: bool,
}

/// One block placed into a content region.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Card(ModuleCard),
    /// Shown instead of an empty module list.
    Placeholder,
}

impl Fragment {
    pub fn markup(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_markup(&mut out)?;
        Ok(out)
    }

    pub fn write_markup(&self, out: &mut String) -> fmt::Result {
        match self {
            Fragment::Card(card) => card.write_markup(out),
            Fragment::Placeholder => out.write_str(&crate::cards::placeholder_markup()),
        }
    }
}

pub trait RenderTarget: Send + Sync {
    fn form_input(&self) -> FormInput;

    /// Restores every form control to its default value.
    fn reset_form(&self);

    fn set_text(&self, element: Element, text: &str);

    fn set_visible(&self, element: Element, visible: bool);

    /// Drops the current content of `element` and inserts `fragments` in order.
    fn replace_content(&self, element: Element, fragments: Vec<Fragment>);

    fn scroll_into_view(&self, element: Element);

    fn scroll_to_top(&self);

    /// Blocking notice addressed to the user.
    fn alert(&self, message: &str);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &T {
    fn form_input(&self) -> FormInput {
        (**self).form_input()
    }

    fn reset_form(&self) {
        (**self).reset_form()
    }

    fn set_text(&self, element: Element, text: &str) {
        (**self).set_text(element, text)
    }

    fn set_visible(&self, element: Element, visible: bool) {
        (**self).set_visible(element, visible)
    }

    fn replace_content(&self, element: Element, fragments: Vec<Fragment>) {
        (**self).replace_content(element, fragments)
    }

    fn scroll_into_view(&self, element: Element) {
        (**self).scroll_into_view(element)
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top()
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
