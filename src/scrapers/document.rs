use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors surfaced by the extraction core
///
/// Missing or malformed fields never error; these cover the two cases a
/// caller must be able to tell apart from "nothing found".
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Input was empty or whitespace-only
    #[error("document is empty")]
    EmptyDocument,
    /// A configured selector string failed to compile
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Compile a CSS selector string from the configuration table
pub fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Queryable view over one parsed listing document
///
/// html5ever parses best-effort, so structurally broken markup still yields
/// a tree; only unreadable input is rejected.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Result<Self, ScrapeError> {
        if raw.trim().is_empty() {
            return Err(ScrapeError::EmptyDocument);
        }
        Ok(Self {
            html: Html::parse_document(raw),
        })
    }

    /// First element matching the selector, if any
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Whitespace-normalized text of the first match, if any
    pub fn text_of(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector).map(|el| normalized_text(&el))
    }
}

/// Join an element's text nodes, collapsing whitespace runs to single spaces
pub fn normalized_text(element: &ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Direct child elements of an element, skipping text and comment nodes
pub fn child_elements<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}
