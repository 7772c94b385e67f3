//! Console methods a rendered record can be dispatched to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inline-style placeholder token.
pub const STYLE_PLACEHOLDER: &str = "%c";

/// Placeholder for DOM-like elements (host picks element formatting).
pub const ELEMENT_PLACEHOLDER: &str = "%o";

/// Placeholder for arbitrary objects (host picks deep-inspection formatting).
pub const OBJECT_PLACEHOLDER: &str = "%O";

/// The logging methods of a host console.
///
/// Each variant maps to exactly one host binding, so dispatch is a match
/// rather than a lookup by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleMethod {
    Log,
    Info,
    Debug,
    Warn,
    Error,
    Group,
    GroupCollapsed,
    GroupEnd,
}

impl ConsoleMethod {
    /// Every method, in declaration order.
    pub const ALL: [ConsoleMethod; 8] = [
        ConsoleMethod::Log,
        ConsoleMethod::Info,
        ConsoleMethod::Debug,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
        ConsoleMethod::Group,
        ConsoleMethod::GroupCollapsed,
        ConsoleMethod::GroupEnd,
    ];

    /// The host-side method name (`console.<name>`).
    pub fn name(self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupCollapsed => "groupCollapsed",
            ConsoleMethod::GroupEnd => "groupEnd",
        }
    }

    /// Returns true for methods that open a console group.
    pub fn opens_group(self) -> bool {
        matches!(self, ConsoleMethod::Group | ConsoleMethod::GroupCollapsed)
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_host_methods() {
        assert_eq!(ConsoleMethod::GroupCollapsed.name(), "groupCollapsed");
        assert_eq!(ConsoleMethod::Warn.to_string(), "warn");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let m: ConsoleMethod = serde_json::from_str("\"groupEnd\"").unwrap();
        assert_eq!(m, ConsoleMethod::GroupEnd);
    }

    #[test]
    fn test_opens_group() {
        assert!(ConsoleMethod::Group.opens_group());
        assert!(ConsoleMethod::GroupCollapsed.opens_group());
        assert!(!ConsoleMethod::GroupEnd.opens_group());
    }
}
