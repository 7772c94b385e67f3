//! Positional arguments substituted into a record's template.

use std::fmt;

use serde_json::Value;

/// An opaque reference to a UI element.
///
/// On `wasm32` this wraps a live `web_sys::Element`. Elsewhere there is no
/// DOM, so the reference carries the element's markup instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRef {
    #[cfg(target_arch = "wasm32")]
    element: web_sys::Element,
    #[cfg(not(target_arch = "wasm32"))]
    markup: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl ElementRef {
    /// Creates an element reference described by its markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Returns the element's markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[cfg(target_arch = "wasm32")]
impl ElementRef {
    /// Wraps a DOM element.
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Returns the wrapped DOM element.
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }

    /// Returns the element's outer HTML.
    pub fn markup(&self) -> String {
        self.element.outer_html()
    }
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::Element> for ElementRef {
    fn from(element: web_sys::Element) -> Self {
        Self::new(element)
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markup())
    }
}

/// A value substituted for a placeholder in a record's template.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A normalized CSS declaration string, consumed by `%c`.
    Style(String),
    /// An element reference, consumed by `%o`.
    Element(ElementRef),
    /// An arbitrary value, consumed by `%O`.
    Object(Value),
}

impl Arg {
    /// Returns the declaration string if this is a style argument.
    pub fn as_style(&self) -> Option<&str> {
        match self {
            Arg::Style(css) => Some(css),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Style(css) => f.write_str(css),
            Arg::Element(element) => fmt::Display::fmt(element, f),
            Arg::Object(value) => fmt::Display::fmt(value, f),
        }
    }
}
