//! Terminal console host.

use console::{Style, Term};

use super::{Arg, Console, ConsoleMethod};
use crate::render::{segments, Segment};
use crate::util::{css_declarations, parse_css_color};

/// A console that writes records to the terminal.
///
/// `%c` directives are approximated with ANSI styling, elements print as
/// markup and objects as pretty JSON. Group records print their label and
/// indent the lines that follow until the matching group end. Warnings and
/// errors go to stderr, everything else to stdout.
#[derive(Debug, Clone)]
pub struct TermConsole {
    stdout: Term,
    stderr: Term,
    depth: usize,
    force_styling: Option<bool>,
}

impl TermConsole {
    /// Creates a terminal console that follows the terminal's color support.
    pub fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            depth: 0,
            force_styling: None,
        }
    }

    /// Forces ANSI styling on or off regardless of terminal detection.
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.force_styling = Some(enabled);
        self
    }

    /// Current group nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Renders a record as the line this console would write, without indentation.
    pub fn format_line(&self, template: &str, args: &[Arg]) -> String {
        let mut line = String::new();
        let mut style = self.base_style();
        for segment in segments(template, args) {
            match segment {
                Segment::Text(text) => line.push_str(&style.apply_to(text).to_string()),
                Segment::Style(css) => style = self.term_style(css),
                Segment::Value { arg, expanded } => line.push_str(&format_value(arg, expanded)),
                Segment::Trailing(arg) => {
                    line.push(' ');
                    line.push_str(&format_value(arg, true));
                }
            }
        }
        line
    }

    fn base_style(&self) -> Style {
        match self.force_styling {
            Some(force) => Style::new().force_styling(force),
            None => Style::new(),
        }
    }

    /// Maps a CSS declaration string onto the closest terminal style.
    fn term_style(&self, css: &str) -> Style {
        let mut style = self.base_style();
        for (property, value) in css_declarations(css) {
            match property {
                "color" => {
                    if let Some(color) = parse_css_color(value) {
                        style = style.fg(color);
                    }
                }
                "background" | "background-color" => {
                    if let Some(color) = parse_css_color(value) {
                        style = style.bg(color);
                    }
                }
                "font-weight" => {
                    let bold = match value {
                        "bold" | "bolder" => true,
                        other => other.parse::<u32>().map(|w| w >= 600).unwrap_or(false),
                    };
                    if bold {
                        style = style.bold();
                    }
                }
                "font-style" if value == "italic" || value == "oblique" => {
                    style = style.italic();
                }
                "text-decoration" | "text-decoration-line" if value.contains("underline") => {
                    style = style.underlined();
                }
                _ => {}
            }
        }
        style
    }

    fn write(&self, method: ConsoleMethod, line: &str) {
        let term = match method {
            ConsoleMethod::Warn | ConsoleMethod::Error => &self.stderr,
            _ => &self.stdout,
        };
        let indented = format!("{}{}", "  ".repeat(self.depth), line);
        if let Err(err) = term.write_line(&indented) {
            log::warn!("failed to write {} record to terminal: {}", method, err);
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]) {
        match method {
            ConsoleMethod::GroupEnd => {
                self.depth = self.depth.saturating_sub(1);
            }
            ConsoleMethod::Group | ConsoleMethod::GroupCollapsed => {
                let marker = if method == ConsoleMethod::Group { "▾ " } else { "▸ " };
                let line = format!("{}{}", marker, self.format_line(template, args));
                self.write(method, &line);
                self.depth += 1;
            }
            _ => {
                let line = self.format_line(template, args);
                self.write(method, &line);
            }
        }
    }
}

fn format_value(arg: &Arg, expanded: bool) -> String {
    match arg {
        Arg::Object(value) if expanded => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
