//! Laying level messages out on a span tree.

use super::message::{LogOptions, Message};
use super::template::LevelTemplate;
use crate::span::SpanTree;
use crate::style::{Declarations, StyleValue};

/// Text placed between a title and the message body.
pub const TITLE_SEPARATOR: &str = ": ";

const TITLE_FONT: &str = "Arial, \"Microsoft YaHei\", sans-serif";
const BODY_FONT_SIZE: &str = "12px";
const LIST_BULLET: &str = "⚡ ";

/// Appends a complete level message to `tree`: header, body and, when
/// grouped, the closing group marker.
pub(crate) fn compose(
    tree: &mut SpanTree,
    template: &LevelTemplate,
    message: &Message,
    options: &LogOptions,
) {
    write_header(tree, template, options);

    if options.group {
        let items: Vec<&Message> = match message {
            Message::List(items) => items.iter().collect(),
            other => vec![other],
        };
        if !items.is_empty() {
            tree.line();
            for item in items {
                tree.text(LIST_BULLET);
                write_body(tree, item);
                tree.line();
            }
        }
        tree.group_end();
    } else {
        write_body(tree, message);
    }
}

fn write_header(tree: &mut SpanTree, template: &LevelTemplate, options: &LogOptions) {
    if options.group {
        tree.group(options.expanded);
    }

    if let Some(prefix) = &template.prefix {
        let padding = template.resolve_padding(options.group);
        tree.style(
            Declarations::new()
                .add("paddingLeft", format!("{}px", padding.left))
                .add("paddingRight", format!("{}px", padding.right)),
        )
        .text(prefix)
        .style_end();
    }

    let title = options.title.as_deref().unwrap_or(&template.title);
    tree.style(
        Declarations::new()
            .add("color", template.title_color())
            .add("fontSize", BODY_FONT_SIZE)
            .add("fontWeight", 600)
            .add("fontFamily", TITLE_FONT),
    )
    .text(&format!("{}{}", title, TITLE_SEPARATOR))
    .style_end();
}

fn body_style(color: &str) -> Declarations {
    Declarations::new()
        .add("fontSize", BODY_FONT_SIZE)
        .add("color", color)
}

fn write_body(tree: &mut SpanTree, message: &Message) {
    match message {
        Message::Null => {
            tree.style(body_style("#73d13d")).text("null").style_end();
        }
        Message::Undefined => {
            tree.style(body_style("#5cdbd3")).text("undefined").style_end();
        }
        Message::Text(text) if text.is_empty() => {
            tree.text("");
        }
        Message::Text(text) => {
            tree.style(body_style("#1f1f1f")).text(text).style_end();
        }
        Message::Number(n) => {
            let text = StyleValue::Number(*n).to_string();
            tree.style(body_style("#40a9ff")).text(&text).style_end();
        }
        Message::Bool(b) => {
            let color = if *b { "#1d39c4" } else { "#9254de" };
            tree.style(body_style(color)).text(&b.to_string()).style_end();
        }
        Message::Element(element) => {
            tree.element(element.clone());
        }
        Message::Object(value) => {
            tree.object(value.clone());
        }
        Message::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    tree.text(" ");
                }
                write_body(tree, item);
            }
        }
    }
}
