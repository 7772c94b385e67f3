//! Message payloads and per-call options.

use serde::Serialize;
use serde_json::Value;

use crate::console::ElementRef;

/// A value handed to a level method such as [`ConsoleLogger::log`](crate::ConsoleLogger::log).
///
/// Scalars render as colored text, elements and objects are passed to the
/// host for inspection, and lists render item by item.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Null,
    Undefined,
    Text(String),
    Number(f64),
    Bool(bool),
    Element(ElementRef),
    Object(Value),
    List(Vec<Message>),
}

impl Message {
    /// Serializes `value` into an object message.
    ///
    /// Values that fail to serialize become [`Message::Undefined`].
    pub fn object<T: Serialize + ?Sized>(value: &T) -> Message {
        serde_json::to_value(value)
            .map(Message::Object)
            .unwrap_or(Message::Undefined)
    }

    /// Whether there is nothing to print. Level methods ignore empty messages.
    pub fn is_empty(&self) -> bool {
        match self {
            Message::Null | Message::Undefined => true,
            Message::Text(text) => text.is_empty(),
            Message::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<bool> for Message {
    fn from(value: bool) -> Self {
        Message::Bool(value)
    }
}

impl From<f64> for Message {
    fn from(value: f64) -> Self {
        Message::Number(value)
    }
}

impl From<i32> for Message {
    fn from(value: i32) -> Self {
        Message::Number(value as f64)
    }
}

impl From<i64> for Message {
    fn from(value: i64) -> Self {
        Message::Number(value as f64)
    }
}

impl From<u32> for Message {
    fn from(value: u32) -> Self {
        Message::Number(value as f64)
    }
}

impl From<usize> for Message {
    fn from(value: usize) -> Self {
        Message::Number(value as f64)
    }
}

impl From<ElementRef> for Message {
    fn from(element: ElementRef) -> Self {
        Message::Element(element)
    }
}

/// JSON scalars map onto the matching scalar message; arrays and objects
/// stay objects so the host can inspect them.
impl From<Value> for Message {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Message::Null,
            Value::Bool(b) => Message::Bool(b),
            Value::Number(n) => n.as_f64().map(Message::Number).unwrap_or(Message::Undefined),
            Value::String(s) => Message::Text(s),
            other => Message::Object(other),
        }
    }
}

impl<T: Into<Message>> From<Vec<T>> for Message {
    fn from(items: Vec<T>) -> Self {
        Message::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Message::Null)
    }
}

/// Options for a single level call.
///
/// A plain string converts into options carrying just a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Replaces the level's default title.
    pub title: Option<String>,
    /// Prints the message inside a console group headed by the title.
    pub group: bool,
    /// Whether the group starts expanded.
    pub expanded: bool,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Groups the message, expanded or collapsed.
    pub fn grouped(mut self, expanded: bool) -> Self {
        self.group = true;
        self.expanded = expanded;
        self
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            title: None,
            group: false,
            expanded: true,
        }
    }
}

impl From<&str> for LogOptions {
    fn from(title: &str) -> Self {
        LogOptions::new().title(title)
    }
}

impl From<String> for LogOptions {
    fn from(title: String) -> Self {
        LogOptions::new().title(title)
    }
}
