//! Arena-backed span tree with a style-scope cursor.

use serde_json::Value;

use crate::console::ElementRef;
use crate::style::Declarations;

/// Index of a span in its [`SpanTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanId(usize);

impl SpanId {
    /// The root span, present in every tree.
    pub const ROOT: SpanId = SpanId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// What a span represents.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanKind {
    /// The aggregation point for top-level children.
    Root,
    /// A style scope; its children render under its cumulative style.
    Style,
    Text(String),
    Element(ElementRef),
    Object(Value),
    /// Opens an expanded console group.
    Group,
    /// Opens a collapsed console group.
    GroupCollapsed,
    /// Closes the innermost console group.
    GroupEnd,
    /// Starts a new console call.
    Line,
}

/// A node in the span tree.
#[derive(Debug, Clone)]
pub struct Span {
    pub kind: SpanKind,
    /// Cumulative style: the parent's styles overridden by this span's own
    /// declarations. Empty for everything but the root and style spans.
    pub styles: Declarations,
    pub parent: Option<SpanId>,
    pub children: Vec<SpanId>,
}

impl Span {
    fn new(kind: SpanKind, styles: Declarations, parent: Option<SpanId>) -> Self {
        Self {
            kind,
            styles,
            parent,
            children: Vec::new(),
        }
    }
}

/// A span tree plus the cursor that builder operations append under.
///
/// Style scopes nest: [`style`](Self::style) opens a child scope and moves the
/// cursor into it, [`style_end`](Self::style_end) moves it back out. Every
/// other operation appends a child under the cursor and leaves it in place.
///
/// # Example
///
/// ```rust
/// use spangle::{Declarations, SpanId, SpanTree};
///
/// let mut tree = SpanTree::new();
/// tree.style(Declarations::new().add("color", "red"))
///     .text("hi")
///     .style_end();
///
/// assert_eq!(tree.cursor(), SpanId::ROOT);
/// assert_eq!(tree.root().children.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SpanTree {
    spans: Vec<Span>,
    cursor: SpanId,
}

impl SpanTree {
    /// Creates a tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            spans: vec![Span::new(SpanKind::Root, Declarations::new(), None)],
            cursor: SpanId::ROOT,
        }
    }

    /// Discards every span but the root and moves the cursor back to it.
    pub fn reset(&mut self) {
        self.spans.truncate(1);
        self.spans[0] = Span::new(SpanKind::Root, Declarations::new(), None);
        self.cursor = SpanId::ROOT;
    }

    pub fn root(&self) -> &Span {
        &self.spans[0]
    }

    pub fn cursor(&self) -> SpanId {
        self.cursor
    }

    pub fn get(&self, id: SpanId) -> Option<&Span> {
        self.spans.get(id.0)
    }

    /// Returns the span at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different tree or predates a reset.
    pub fn span(&self, id: SpanId) -> &Span {
        &self.spans[id.0]
    }

    /// Total number of spans, the root included.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if nothing has been added since the last reset.
    pub fn is_empty(&self) -> bool {
        self.spans.len() == 1
    }

    fn push(&mut self, kind: SpanKind, styles: Declarations) -> SpanId {
        let id = SpanId(self.spans.len());
        self.spans.push(Span::new(kind, styles, Some(self.cursor)));
        self.spans[self.cursor.0].children.push(id);
        id
    }

    /// Opens a style scope under the cursor and moves the cursor into it.
    ///
    /// The new span's styles are the cursor's styles overridden by `declarations`.
    pub fn style(&mut self, declarations: impl Into<Declarations>) -> &mut Self {
        let styles = self.spans[self.cursor.0].styles.merged(&declarations.into());
        self.cursor = self.push(SpanKind::Style, styles);
        self
    }

    /// Moves the cursor to its parent. Does nothing at the root.
    pub fn style_end(&mut self) -> &mut Self {
        if let Some(parent) = self.spans[self.cursor.0].parent {
            self.cursor = parent;
        }
        self
    }

    /// Appends a text run with no local declarations.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.styled_text(text, Declarations::new())
    }

    /// Appends a text run inside its own style scope.
    ///
    /// The scope is opened even when `declarations` is empty, so every run
    /// gets its own style span. The cursor is unchanged on return.
    pub fn styled_text(&mut self, text: &str, declarations: impl Into<Declarations>) -> &mut Self {
        self.style(declarations);
        self.push(SpanKind::Text(text.to_string()), Declarations::new());
        self.style_end()
    }

    pub fn element(&mut self, element: ElementRef) -> &mut Self {
        self.push(SpanKind::Element(element), Declarations::new());
        self
    }

    pub fn object(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push(SpanKind::Object(value.into()), Declarations::new());
        self
    }

    /// Appends a group marker. The cursor does not move into it.
    pub fn group(&mut self, expanded: bool) -> &mut Self {
        let kind = if expanded {
            SpanKind::Group
        } else {
            SpanKind::GroupCollapsed
        };
        self.push(kind, Declarations::new());
        self
    }

    pub fn group_end(&mut self) -> &mut Self {
        self.push(SpanKind::GroupEnd, Declarations::new());
        self
    }

    /// Appends a line marker, forcing a new console call.
    pub fn line(&mut self) -> &mut Self {
        self.push(SpanKind::Line, Declarations::new());
        self
    }
}

impl Default for SpanTree {
    fn default() -> Self {
        Self::new()
    }
}
