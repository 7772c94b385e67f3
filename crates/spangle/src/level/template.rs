//! Level descriptors.

use serde::{Deserialize, Serialize};

use crate::console::ConsoleMethod;

/// Title color used when a level does not set its own.
pub const DEFAULT_TITLE_COLOR: &str = "#8C8C8C";

/// Logging levels offered by [`ConsoleLogger`](crate::ConsoleLogger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Log,
    Info,
    Debug,
    Success,
    Warn,
    Error,
    Loading,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Log,
        Level::Info,
        Level::Debug,
        Level::Success,
        Level::Warn,
        Level::Error,
        Level::Loading,
    ];

    /// The built-in descriptor for this level.
    pub fn template(self) -> LevelTemplate {
        match self {
            Level::Log => LevelTemplate::new(ConsoleMethod::Log, "Log", "💭"),
            Level::Info => LevelTemplate::new(ConsoleMethod::Info, "Info", "📢"),
            Level::Debug => LevelTemplate::new(ConsoleMethod::Debug, "Debug", "🐞"),
            Level::Success => {
                LevelTemplate::new(ConsoleMethod::Info, "Success", "🍀").color("#389e0d")
            }
            Level::Warn => LevelTemplate::new(ConsoleMethod::Warn, "Warning", "😠")
                .color("#faad14")
                .padding(Padding::new(0, 5)),
            Level::Error => LevelTemplate::new(ConsoleMethod::Error, "Error", "😈")
                .color("#f5222d")
                .padding(Padding::new(0, 5)),
            Level::Loading => LevelTemplate::new(ConsoleMethod::Info, "Loading", "⏳")
                .color("#ff7a45")
                .padding(Padding::new(12, 7))
                .group_padding(Padding::new(2, 7)),
        }
    }
}

/// Horizontal padding around a prefix icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub const fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }
}

/// How a level's header is drawn and which console method it prints through.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTemplate {
    pub method: ConsoleMethod,
    pub title: String,
    pub prefix: Option<String>,
    pub color: Option<String>,
    /// Prefix padding; `None` uses 10px left (0px when grouped) and 5px right.
    pub padding: Option<Padding>,
    /// Prefix padding when grouped; `None` falls back to `padding`.
    pub group_padding: Option<Padding>,
}

impl LevelTemplate {
    pub fn new(method: ConsoleMethod, title: &str, prefix: &str) -> Self {
        Self {
            method,
            title: title.to_string(),
            prefix: Some(prefix.to_string()),
            color: None,
            padding: None,
            group_padding: None,
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn group_padding(mut self, padding: Padding) -> Self {
        self.group_padding = Some(padding);
        self
    }

    /// The prefix padding to use for a grouped or inline message.
    pub fn resolve_padding(&self, grouped: bool) -> Padding {
        let configured = if grouped {
            self.group_padding.or(self.padding)
        } else {
            self.padding
        };
        configured.unwrap_or(Padding::new(if grouped { 0 } else { 10 }, 5))
    }

    /// The title color, or [`DEFAULT_TITLE_COLOR`].
    pub fn title_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_TITLE_COLOR)
    }

    /// Applies configured overrides on top of this descriptor.
    pub fn with_override(mut self, overrides: &LevelOverride) -> Self {
        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }
        if let Some(prefix) = &overrides.prefix {
            self.prefix = (!prefix.is_empty()).then(|| prefix.clone());
        }
        if let Some(color) = &overrides.color {
            self.color = Some(color.clone());
        }
        if let Some(method) = overrides.method {
            self.method = method;
        }
        self
    }
}

/// Partial replacement of a level descriptor, as read from configuration.
///
/// An empty `prefix` removes the icon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelOverride {
    pub title: Option<String>,
    pub prefix: Option<String>,
    pub color: Option<String>,
    pub method: Option<ConsoleMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_methods() {
        assert_eq!(Level::Success.template().method, ConsoleMethod::Info);
        assert_eq!(Level::Loading.template().method, ConsoleMethod::Info);
        assert_eq!(Level::Error.template().method, ConsoleMethod::Error);
        assert_eq!(Level::Debug.template().method, ConsoleMethod::Debug);
    }

    #[test]
    fn test_default_padding() {
        let log = Level::Log.template();
        assert_eq!(log.resolve_padding(false), Padding::new(10, 5));
        assert_eq!(log.resolve_padding(true), Padding::new(0, 5));
    }

    #[test]
    fn test_loading_group_padding() {
        let loading = Level::Loading.template();
        assert_eq!(loading.resolve_padding(false), Padding::new(12, 7));
        assert_eq!(loading.resolve_padding(true), Padding::new(2, 7));
    }

    #[test]
    fn test_fixed_padding_ignores_grouping() {
        let warn = Level::Warn.template();
        assert_eq!(warn.resolve_padding(false), Padding::new(0, 5));
        assert_eq!(warn.resolve_padding(true), Padding::new(0, 5));
    }

    #[test]
    fn test_title_color_fallback() {
        assert_eq!(Level::Info.template().title_color(), DEFAULT_TITLE_COLOR);
        assert_eq!(Level::Error.template().title_color(), "#f5222d");
    }

    #[test]
    fn test_override_applies_fields() {
        let overrides = LevelOverride {
            title: Some("Oops".into()),
            prefix: Some(String::new()),
            ..Default::default()
        };
        let template = Level::Error.template().with_override(&overrides);
        assert_eq!(template.title, "Oops");
        assert_eq!(template.prefix, None);
        assert_eq!(template.color.as_deref(), Some("#f5222d"));
    }
}
