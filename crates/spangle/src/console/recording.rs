//! In-memory console host.

use std::collections::BTreeSet;

use super::{Arg, Console, ConsoleCall, ConsoleMethod};

/// A console that records every call it receives.
///
/// Useful for tests and for callers that want to post-process rendered
/// output. Methods can be removed to mimic hosts that lack them.
///
/// # Example
///
/// ```rust
/// use spangle::{ConsoleLogger, ConsoleMethod, LoggerOptions, RecordingConsole, StyleMode};
///
/// let options = LoggerOptions { style_mode: StyleMode::Never, ..Default::default() };
/// let mut logger = ConsoleLogger::with_console(RecordingConsole::new(), options);
/// logger.text("hello").print(ConsoleMethod::Log);
///
/// let calls = logger.console().calls();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].template, "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    calls: Vec<ConsoleCall>,
    missing: BTreeSet<ConsoleMethod>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a console that reports `method` as unsupported.
    pub fn without(mut self, method: ConsoleMethod) -> Self {
        self.missing.insert(method);
        self
    }

    /// The calls received so far, in dispatch order.
    pub fn calls(&self) -> &[ConsoleCall] {
        &self.calls
    }

    /// Removes and returns the recorded calls.
    pub fn take(&mut self) -> Vec<ConsoleCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Console for RecordingConsole {
    fn call(&mut self, method: ConsoleMethod, template: &str, args: &[Arg]) {
        self.calls.push(ConsoleCall {
            method,
            template: template.to_string(),
            args: args.to_vec(),
        });
    }

    fn supports(&self, method: ConsoleMethod) -> bool {
        !self.missing.contains(&method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut console = RecordingConsole::new();
        console.call(ConsoleMethod::Log, "a", &[]);
        console.call(ConsoleMethod::Warn, "%cb", &[Arg::Style("color:red;".into())]);

        let calls = console.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, ConsoleMethod::Log);
        assert_eq!(calls[1].template, "%cb");
        assert_eq!(calls[1].styles().collect::<Vec<_>>(), vec!["color:red;"]);
    }

    #[test]
    fn test_without_marks_method_unsupported() {
        let console = RecordingConsole::new().without(ConsoleMethod::Debug);
        assert!(!console.supports(ConsoleMethod::Debug));
        assert!(console.supports(ConsoleMethod::Log));
    }

    #[test]
    fn test_take_drains() {
        let mut console = RecordingConsole::new();
        console.call(ConsoleMethod::Info, "x", &[]);
        assert_eq!(console.take().len(), 1);
        assert!(console.calls().is_empty());
    }
}
