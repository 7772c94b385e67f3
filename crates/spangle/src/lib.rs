//! # Spangle - Styled span trees for host consoles
//!
//! Spangle composes nested style scopes, text runs, embedded objects and
//! console groups into a tree, then flattens that tree into the
//! template-plus-arguments calls a host console understands (`%c` for inline
//! CSS, `%o` for elements, `%O` for objects).
//!
//! ## Quick Start
//!
//! ```rust
//! use spangle::{ConsoleLogger, ConsoleMethod, Declarations, LoggerOptions, RecordingConsole, StyleMode};
//!
//! let options = LoggerOptions { style_mode: StyleMode::Always, ..Default::default() };
//! let mut logger = ConsoleLogger::with_console(RecordingConsole::new(), options);
//!
//! logger
//!     .style(Declarations::new().add("color", "red"))
//!     .style(Declarations::new().add("fontWeight", 700))
//!     .text("bold red")
//!     .style_end()
//!     .style_end()
//!     .print(ConsoleMethod::Log);
//!
//! let call = &logger.console().calls()[0];
//! assert_eq!(call.template, "%cbold red%c");
//! assert_eq!(call.styles().next(), Some("color:red;font-weight:700;"));
//! ```
//!
//! ## Concepts
//!
//! - **Span tree**: style scopes nest; groups, group ends and lines are
//!   markers placed among their siblings. See [`SpanTree`].
//! - **Rendering**: a depth-first walk producing [`ConsoleCall`]s, merging
//!   adjacent style directives and dropping records that would print
//!   nothing. See [`render_tree`].
//! - **Capability gate**: hosts that cannot render `%c` (legacy IE, old
//!   Firefox) get plain text. See [`StyleMode`] and [`set_capability_probe`].
//! - **Levels**: `log`, `info`, `debug`, `success`, `warn`, `error` and
//!   `loading` print a message under an icon and title described by a
//!   [`LevelTemplate`]. Disabled loggers still print errors.
//!
//! ## Hosts
//!
//! On `wasm32` the default console is `WebConsole`, which forwards to the
//! browser's `console`. Elsewhere it is `TermConsole`, which approximates
//! the CSS with ANSI styling. [`RecordingConsole`] keeps calls in memory.

pub mod capability;
pub mod config;
pub mod console;
pub mod level;
mod logger;
pub mod render;
pub mod span;
pub mod style;
mod util;

pub use capability::{
    detect_user_agent, reset_capability_probe, set_capability_probe, styling_supported,
    supports_styling, StyleMode, UserAgent,
};
pub use config::{ConfigError, LoggerOptions};
#[cfg(not(target_arch = "wasm32"))]
pub use console::TermConsole;
#[cfg(target_arch = "wasm32")]
pub use console::WebConsole;
pub use console::{
    Arg, Console, ConsoleCall, ConsoleMethod, DefaultConsole, ElementRef, RecordingConsole,
    ELEMENT_PLACEHOLDER, OBJECT_PLACEHOLDER, STYLE_PLACEHOLDER,
};
pub use level::{Level, LevelOverride, LevelTemplate, LogOptions, Message, Padding, TITLE_SEPARATOR};
pub use logger::ConsoleLogger;
pub use render::{render_records, render_tree};
pub use span::{Span, SpanId, SpanKind, SpanTree};
pub use style::{to_css, Declarations, StyleValue};
pub use util::{parse_css_color, rgb_to_ansi256};
