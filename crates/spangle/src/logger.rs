//! The console logger.

use serde_json::Value;

use crate::capability::StyleMode;
use crate::config::LoggerOptions;
use crate::console::{Console, ConsoleMethod, DefaultConsole, ElementRef};
use crate::level::{compose, Level, LogOptions, Message};
use crate::render::render_tree;
use crate::span::SpanTree;
use crate::style::Declarations;

/// Builds styled messages and prints them to a host console.
///
/// A logger owns one span tree. Builder operations append to it; [`print`]
/// renders it into console calls, dispatches them and resets the tree, so a
/// single long-lived logger can serve unrelated messages. The tree is plain
/// mutable state: callers sharing a logger must serialize build-then-print
/// sequences themselves.
///
/// The level methods ([`log`], [`info`], [`error`], ...) build and print a
/// complete message in one call.
///
/// # Example
///
/// ```rust
/// use spangle::{ConsoleLogger, ConsoleMethod, Declarations, LoggerOptions, RecordingConsole, StyleMode};
///
/// let options = LoggerOptions { style_mode: StyleMode::Always, ..Default::default() };
/// let mut logger = ConsoleLogger::with_console(RecordingConsole::new(), options);
///
/// logger
///     .style(Declarations::new().add("color", "red"))
///     .text("alert")
///     .style_end()
///     .print(ConsoleMethod::Warn);
///
/// let call = &logger.console().calls()[0];
/// assert_eq!(call.method, ConsoleMethod::Warn);
/// assert_eq!(call.template, "%calert%c");
/// assert!(logger.tree().is_empty());
/// ```
///
/// [`print`]: Self::print
/// [`log`]: Self::log
/// [`info`]: Self::info
/// [`error`]: Self::error
#[derive(Debug)]
pub struct ConsoleLogger<C: Console = DefaultConsole> {
    console: C,
    tree: SpanTree,
    options: LoggerOptions,
}

impl ConsoleLogger<DefaultConsole> {
    /// Creates an enabled logger on the platform's default console.
    pub fn new() -> Self {
        Self::with_options(LoggerOptions::default())
    }

    pub fn with_options(options: LoggerOptions) -> Self {
        Self::with_console(DefaultConsole::new(), options)
    }
}

impl Default for ConsoleLogger<DefaultConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> ConsoleLogger<C> {
    /// Creates a logger printing to `console`.
    pub fn with_console(console: C, options: LoggerOptions) -> Self {
        Self {
            console,
            tree: SpanTree::new(),
            options,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// The pending, not yet printed, span tree.
    pub fn tree(&self) -> &SpanTree {
        &self.tree
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn set_style_mode(&mut self, mode: StyleMode) {
        self.options.style_mode = mode;
    }

    pub fn is_enabled(&self) -> bool {
        !self.options.disabled
    }

    pub fn enable(&mut self) {
        self.options.disabled = false;
    }

    /// Silences the logger. Error output is still printed.
    pub fn disable(&mut self) {
        self.options.disabled = true;
    }

    /// Opens a style scope; see [`SpanTree::style`].
    pub fn style(&mut self, declarations: impl Into<Declarations>) -> &mut Self {
        self.tree.style(declarations);
        self
    }

    /// Closes the innermost style scope.
    pub fn style_end(&mut self) -> &mut Self {
        self.tree.style_end();
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.tree.text(text);
        self
    }

    /// Appends text under its own additional declarations.
    pub fn styled_text(&mut self, text: &str, declarations: impl Into<Declarations>) -> &mut Self {
        self.tree.styled_text(text, declarations);
        self
    }

    pub fn element(&mut self, element: ElementRef) -> &mut Self {
        self.tree.element(element);
        self
    }

    pub fn object(&mut self, value: impl Into<Value>) -> &mut Self {
        self.tree.object(value);
        self
    }

    /// Opens a console group, expanded or collapsed.
    pub fn group(&mut self, expanded: bool) -> &mut Self {
        self.tree.group(expanded);
        self
    }

    pub fn group_end(&mut self) -> &mut Self {
        self.tree.group_end();
        self
    }

    /// Ends the current console call; following content starts a new one.
    pub fn line(&mut self) -> &mut Self {
        self.tree.line();
        self
    }

    /// Renders the pending tree through `method` and resets it.
    ///
    /// Nothing is dispatched while the logger is disabled, unless `method`
    /// is [`ConsoleMethod::Error`]. The tree is reset either way.
    pub fn print(&mut self, method: ConsoleMethod) {
        if self.is_enabled() || method == ConsoleMethod::Error {
            self.dispatch(method);
        }
        self.tree.reset();
    }

    fn dispatch(&mut self, method: ConsoleMethod) {
        let styling = self.options.style_mode.should_style();
        let calls = render_tree(&self.tree, method, styling);
        log::trace!("dispatching {} {} call(s)", calls.len(), method);

        for call in &calls {
            if self.console.supports(call.method) {
                self.console.call(call.method, &call.template, &call.args);
            } else {
                log::debug!("host console lacks `{}`; record skipped", call.method);
            }
        }
    }

    /// Prints `message` under `level`'s header.
    ///
    /// Empty messages print nothing. A disabled logger prints only
    /// [`Level::Error`]. Anything built on the tree beforehand is discarded.
    pub fn emit(&mut self, level: Level, message: impl Into<Message>, options: impl Into<LogOptions>) {
        let message = message.into();
        if message.is_empty() || (!self.is_enabled() && level != Level::Error) {
            return;
        }

        let template = self.options.template(level);
        self.tree.reset();
        compose(&mut self.tree, &template, &message, &options.into());
        self.dispatch(template.method);
        self.tree.reset();
    }

    pub fn log(&mut self, message: impl Into<Message>) {
        self.emit(Level::Log, message, LogOptions::default());
    }

    pub fn info(&mut self, message: impl Into<Message>) {
        self.emit(Level::Info, message, LogOptions::default());
    }

    pub fn debug(&mut self, message: impl Into<Message>) {
        self.emit(Level::Debug, message, LogOptions::default());
    }

    pub fn success(&mut self, message: impl Into<Message>) {
        self.emit(Level::Success, message, LogOptions::default());
    }

    pub fn warn(&mut self, message: impl Into<Message>) {
        self.emit(Level::Warn, message, LogOptions::default());
    }

    /// Prints an error. Errors are printed even when the logger is disabled.
    pub fn error(&mut self, message: impl Into<Message>) {
        self.emit(Level::Error, message, LogOptions::default());
    }

    pub fn loading(&mut self, message: impl Into<Message>) {
        self.emit(Level::Loading, message, LogOptions::default());
    }

    /// Like [`log`](Self::log), with a custom title or grouping.
    ///
    /// A plain string is taken as the title.
    pub fn log_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Log, message, options);
    }

    pub fn info_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Info, message, options);
    }

    pub fn debug_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Debug, message, options);
    }

    pub fn success_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Success, message, options);
    }

    pub fn warn_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Warn, message, options);
    }

    pub fn error_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Error, message, options);
    }

    pub fn loading_with(&mut self, message: impl Into<Message>, options: impl Into<LogOptions>) {
        self.emit(Level::Loading, message, options);
    }

    /// Prints a blank informational line.
    pub fn empty(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.tree.reset();
        self.text(" ").print(ConsoleMethod::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{RecordingConsole, STYLE_PLACEHOLDER};
    use crate::span::SpanId;

    fn logger(mode: StyleMode) -> ConsoleLogger<RecordingConsole> {
        let options = LoggerOptions {
            style_mode: mode,
            ..Default::default()
        };
        ConsoleLogger::with_console(RecordingConsole::new(), options)
    }

    #[test]
    fn test_print_resets_tree() {
        let mut logger = logger(StyleMode::Always);
        logger
            .style(Declarations::new().add("color", "red"))
            .text("left open")
            .group(true);
        logger.print(ConsoleMethod::Log);

        assert!(logger.tree().root().children.is_empty());
        assert_eq!(logger.tree().cursor(), SpanId::ROOT);
    }

    #[test]
    fn test_lone_style_dispatches_nothing() {
        let mut logger = logger(StyleMode::Always);
        logger.style(Declarations::new().add("color", "red"));
        logger.print(ConsoleMethod::Log);
        assert!(logger.console().calls().is_empty());
    }

    #[test]
    fn test_style_mode_never_drops_directives() {
        let mut logger = logger(StyleMode::Never);
        logger
            .style(Declarations::new().add("color", "red"))
            .text("hi")
            .style_end()
            .print(ConsoleMethod::Log);

        let calls = logger.console().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].template, "hi");
        assert!(!calls[0].template.contains(STYLE_PLACEHOLDER));
        assert!(calls[0].args.is_empty());
    }

    #[test]
    fn test_disabled_print_is_noop_except_error() {
        let mut logger = logger(StyleMode::Never);
        logger.disable();
        logger.text("quiet").print(ConsoleMethod::Log);
        assert!(logger.console().calls().is_empty());
        assert!(logger.tree().is_empty());

        logger.text("loud").print(ConsoleMethod::Error);
        assert_eq!(logger.console().calls().len(), 1);
    }

    #[test]
    fn test_disabled_levels_but_error() {
        let mut logger = logger(StyleMode::Always);
        logger.disable();
        assert!(!logger.is_enabled());

        logger.log("hidden");
        logger.info("hidden");
        logger.warn("hidden");
        logger.empty();
        assert!(logger.console().calls().is_empty());

        logger.error("visible");
        let calls = logger.console().calls();
        assert!(!calls.is_empty());
        assert!(calls.iter().all(|c| c.method == ConsoleMethod::Error));
    }

    #[test]
    fn test_enable_restores_output() {
        let mut logger = logger(StyleMode::Never);
        logger.disable();
        logger.log("a");
        logger.enable();
        logger.log("b");
        let calls = logger.console().calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].template.ends_with("b"));
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut logger = logger(StyleMode::Never);
        logger.log("");
        logger.info(Message::Null);
        logger.warn(Vec::<String>::new());
        assert!(logger.console().calls().is_empty());
    }

    #[test]
    fn test_level_methods_use_their_console_method() {
        let mut logger = logger(StyleMode::Never);
        logger.log("l");
        logger.info("i");
        logger.debug("d");
        logger.success("s");
        logger.warn("w");
        logger.error("e");
        logger.loading("o");

        let methods: Vec<ConsoleMethod> = logger.console().calls().iter().map(|c| c.method).collect();
        assert_eq!(
            methods,
            vec![
                ConsoleMethod::Log,
                ConsoleMethod::Info,
                ConsoleMethod::Debug,
                ConsoleMethod::Info,
                ConsoleMethod::Warn,
                ConsoleMethod::Error,
                ConsoleMethod::Info,
            ]
        );
    }

    #[test]
    fn test_emit_discards_pending_tree() {
        let mut logger = logger(StyleMode::Never);
        logger.text("stale ");
        logger.info("fresh");
        let calls = logger.console().calls();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].template.contains("stale"));
        assert!(logger.tree().is_empty());
    }

    #[test]
    fn test_empty_prints_blank_info_line() {
        let mut logger = logger(StyleMode::Never);
        logger.empty();
        let calls = logger.console().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, ConsoleMethod::Info);
        assert_eq!(calls[0].template, " ");
    }

    #[test]
    fn test_missing_console_method_is_skipped() {
        let options = LoggerOptions {
            style_mode: StyleMode::Never,
            ..Default::default()
        };
        let console = RecordingConsole::new().without(ConsoleMethod::Group);
        let mut logger = ConsoleLogger::with_console(console, options);

        logger
            .group(true)
            .text("title")
            .line()
            .text("body")
            .group_end()
            .print(ConsoleMethod::Log);

        let methods: Vec<ConsoleMethod> = logger.console().calls().iter().map(|c| c.method).collect();
        assert_eq!(methods, vec![ConsoleMethod::Log, ConsoleMethod::GroupEnd]);
    }

    #[test]
    fn test_disable_keeps_options_in_sync() {
        let mut logger = logger(StyleMode::Never);
        logger.disable();
        assert!(logger.options().disabled);
        assert!(!logger.is_enabled());

        logger.enable();
        assert!(!logger.options().disabled);
        assert!(logger.is_enabled());
    }

    #[test]
    fn test_level_with_options() {
        let mut logger = logger(StyleMode::Never);
        logger.info_with("ready", "Server");
        logger.warn_with(vec!["a", "b"], LogOptions::new().grouped(false));

        let calls: Vec<(ConsoleMethod, String)> = logger
            .console()
            .calls()
            .iter()
            .map(|c| (c.method, c.plain_text()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (ConsoleMethod::Info, "📢Server: ready".to_string()),
                (ConsoleMethod::GroupCollapsed, "😠Warning: ".to_string()),
                (ConsoleMethod::Warn, "⚡ a".to_string()),
                (ConsoleMethod::Warn, "⚡ b".to_string()),
                (ConsoleMethod::GroupEnd, " ".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_with_prints_when_disabled() {
        let mut logger = logger(StyleMode::Never);
        logger.disable();
        logger.log_with("hidden", "Title");
        logger.error_with("shown", "Failure");

        let calls = logger.console().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].plain_text(), "😈Failure: shown");
    }

    #[test]
    fn test_disabled_from_options() {
        let options = LoggerOptions {
            disabled: true,
            ..Default::default()
        };
        let logger = ConsoleLogger::with_console(RecordingConsole::new(), options);
        assert!(!logger.is_enabled());
    }
}
