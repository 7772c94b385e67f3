//! Depth-first flattening of a span tree.
//!
//! Rendering starts with one empty record of the requested method. Walking
//! the tree appends text and placeholders to the last record; group, group
//! end and line markers start new records. A style span contributes its
//! declaration three times: once when it is entered (opening the run), once
//! after its children (closing it), and once more with its parent's style, so
//! that whatever follows the scope renders under the enclosing style again.
//! Consecutive style directives with no content between them collapse into a
//! single `%c` whose argument is the latest declaration.

use crate::console::{
    Arg, ConsoleCall, ConsoleMethod, ELEMENT_PLACEHOLDER, OBJECT_PLACEHOLDER, STYLE_PLACEHOLDER,
};
use crate::span::{SpanId, SpanKind, SpanTree};
use crate::style::to_css;

/// Renders `tree` into the calls a host should receive, in order.
///
/// Records that are empty, or hold nothing but a lone style placeholder,
/// are dropped. When `styling` is false no `%c` placeholders or style
/// arguments are produced at all.
///
/// # Example
///
/// ```rust
/// use spangle::{render_tree, ConsoleMethod, Declarations, SpanTree};
///
/// let mut tree = SpanTree::new();
/// tree.style(Declarations::new().add("color", "red")).text("hi").style_end();
///
/// let calls = render_tree(&tree, ConsoleMethod::Log, true);
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].template, "%chi%c");
/// ```
pub fn render_tree(tree: &SpanTree, method: ConsoleMethod, styling: bool) -> Vec<ConsoleCall> {
    render_records(tree, method, styling)
        .into_iter()
        .filter(is_dispatchable)
        .collect()
}

/// Renders `tree` into every record, including those that would be suppressed.
pub fn render_records(tree: &SpanTree, method: ConsoleMethod, styling: bool) -> Vec<ConsoleCall> {
    let mut flattener = Flattener {
        tree,
        method,
        styling,
        records: vec![Record::new(method)],
    };
    flattener.render_span(SpanId::ROOT);
    flattener.records.into_iter().map(|r| r.call).collect()
}

/// Whether a record carries anything worth sending to the host.
pub fn is_dispatchable(call: &ConsoleCall) -> bool {
    !call.template.is_empty() && call.template != STYLE_PLACEHOLDER
}

struct Record {
    call: ConsoleCall,
    /// The template ends in a style placeholder with nothing after it yet.
    style_pending: bool,
}

impl Record {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            call: ConsoleCall::new(method),
            style_pending: false,
        }
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.call.template.push_str(text);
            self.style_pending = false;
        }
    }

    fn push_value(&mut self, placeholder: &str, arg: Arg) {
        self.call.template.push_str(placeholder);
        self.call.args.push(arg);
        self.style_pending = false;
    }

    fn merge_style(&mut self, css: String) {
        if self.style_pending {
            if let Some(last) = self.call.args.last_mut() {
                *last = Arg::Style(css);
                return;
            }
        }
        self.call.template.push_str(STYLE_PLACEHOLDER);
        self.call.args.push(Arg::Style(css));
        self.style_pending = true;
    }
}

struct Flattener<'a> {
    tree: &'a SpanTree,
    method: ConsoleMethod,
    styling: bool,
    records: Vec<Record>,
}

impl Flattener<'_> {
    fn last(&self) -> usize {
        self.records.len() - 1
    }

    fn last_mut(&mut self) -> &mut Record {
        let last = self.last();
        &mut self.records[last]
    }

    fn merge_style(&mut self, id: SpanId, target: usize) {
        if !self.styling {
            return;
        }
        let css = to_css(&self.tree.span(id).styles);
        self.records[target].merge_style(css);
    }

    /// Opens `id`'s style on the last record, then renders its children.
    fn render_span(&mut self, id: SpanId) {
        let tree = self.tree;
        let target = self.last();
        self.merge_style(id, target);
        for &child in &tree.span(id).children {
            self.render_child(child);
        }
    }

    fn render_child(&mut self, id: SpanId) {
        let tree = self.tree;
        let span = tree.span(id);
        // The record a style scope closes on is the one it was entered on.
        let target = self.last();
        match &span.kind {
            SpanKind::Style => {
                self.render_span(id);
                self.merge_style(id, target);
                if let Some(parent) = span.parent {
                    self.merge_style(parent, target);
                }
            }
            SpanKind::Group => self.records.push(Record::new(ConsoleMethod::Group)),
            SpanKind::GroupCollapsed => {
                self.records.push(Record::new(ConsoleMethod::GroupCollapsed))
            }
            SpanKind::GroupEnd => {
                let mut end = Record::new(ConsoleMethod::GroupEnd);
                end.push_text(" ");
                self.records.push(end);
                self.records.push(Record::new(self.method));
            }
            SpanKind::Text(text) => self.last_mut().push_text(text),
            SpanKind::Element(element) => self
                .last_mut()
                .push_value(ELEMENT_PLACEHOLDER, Arg::Element(element.clone())),
            SpanKind::Object(value) => self
                .last_mut()
                .push_value(OBJECT_PLACEHOLDER, Arg::Object(value.clone())),
            SpanKind::Line | SpanKind::Root => self.records.push(Record::new(self.method)),
        }
    }
}
