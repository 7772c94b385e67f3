//! Logger configuration.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::capability::StyleMode;
use crate::level::{Level, LevelOverride, LevelTemplate};

/// Errors raised while loading [`LoggerOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid logger configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Construction options for a [`ConsoleLogger`](crate::ConsoleLogger).
///
/// Every field has a default, so configuration documents only need to name
/// what they change.
///
/// # Example
///
/// ```rust
/// use spangle::{Level, LoggerOptions, StyleMode};
///
/// let options = LoggerOptions::from_json(
///     r#"{ "disabled": true, "styleMode": "never", "templates": { "error": { "title": "Failure" } } }"#,
/// ).unwrap();
///
/// assert!(options.disabled);
/// assert_eq!(options.style_mode, StyleMode::Never);
/// assert_eq!(options.template(Level::Error).title, "Failure");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerOptions {
    /// Suppresses every level except errors.
    pub disabled: bool,
    pub style_mode: StyleMode,
    /// Per-level descriptor overrides, keyed by level name.
    pub templates: BTreeMap<Level, LevelOverride>,
}

impl LoggerOptions {
    /// Parses options from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// The descriptor for `level` with any configured overrides applied.
    pub fn template(&self, level: Level) -> LevelTemplate {
        let template = level.template();
        match self.templates.get(&level) {
            Some(overrides) => template.with_override(overrides),
            None => template,
        }
    }
}
