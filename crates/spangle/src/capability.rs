//! Detection of inline style support in the host console.
//!
//! Legacy Internet Explorer and Firefox 11 or older print `%c` directives
//! literally instead of applying them. The gate is evaluated on every print,
//! so a replaced probe takes effect immediately.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A browser identification: name plus version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    pub name: String,
    pub version: Option<String>,
}

impl UserAgent {
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.map(str::to_string),
        }
    }

    /// Identifies the browser from a `User-Agent` header value.
    ///
    /// Returns `None` when no known browser token is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spangle::UserAgent;
    ///
    /// let ua = UserAgent::parse("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko").unwrap();
    /// assert_eq!(ua.name, "IE");
    /// assert_eq!(ua.major_version(), Some(11));
    /// ```
    pub fn parse(header: &str) -> Option<UserAgent> {
        if let Some(version) = token_version(header, "MSIE ") {
            return Some(UserAgent::new("IE", Some(version)));
        }
        if header.contains("Trident/") {
            return Some(UserAgent::new("IE", token_version(header, "rv:")));
        }
        if let Some(version) = token_version(header, "Edg/").or_else(|| token_version(header, "Edge/")) {
            return Some(UserAgent::new("Edge", Some(version)));
        }
        if let Some(version) = token_version(header, "Firefox/") {
            return Some(UserAgent::new("Firefox", Some(version)));
        }
        if let Some(version) = token_version(header, "Chrome/") {
            return Some(UserAgent::new("Chrome", Some(version)));
        }
        if header.contains("Safari/") {
            return Some(UserAgent::new("Safari", token_version(header, "Version/")));
        }
        None
    }

    /// The leading integer of the version string, if any.
    pub fn major_version(&self) -> Option<u32> {
        let version = self.version.as_deref()?;
        let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Extracts the version that follows `token`, up to the next delimiter.
fn token_version<'a>(header: &'a str, token: &str) -> Option<&'a str> {
    let start = header.find(token)? + token.len();
    let rest = &header[start..];
    let end = rest
        .find(|c: char| c == ';' || c == ')' || c.is_whitespace())
        .unwrap_or(rest.len());
    let version = &rest[..end];
    (!version.is_empty()).then_some(version)
}

/// Returns whether a host identified as `agent` renders inline styles.
///
/// An unidentified host is assumed to support them.
pub fn supports_styling(agent: Option<&UserAgent>) -> bool {
    match agent {
        Some(ua) if ua.name == "IE" => false,
        Some(ua) if ua.name == "Firefox" => ua.major_version().map_or(true, |major| major > 11),
        _ => true,
    }
}

/// How a logger decides whether to emit style directives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleMode {
    /// Ask the capability probe at every print.
    #[default]
    Auto,
    /// Always emit style directives.
    Always,
    /// Never emit style directives; text still renders.
    Never,
}

impl StyleMode {
    /// Resolves the mode to a yes/no answer for one print.
    pub fn should_style(self) -> bool {
        match self {
            StyleMode::Auto => styling_supported(),
            StyleMode::Always => true,
            StyleMode::Never => false,
        }
    }
}

type CapabilityProbe = fn() -> Option<UserAgent>;

static CAPABILITY_PROBE: Lazy<Mutex<CapabilityProbe>> = Lazy::new(|| Mutex::new(host_user_agent));

/// Overrides the probe used to identify the host's user agent.
///
/// This is useful for testing or for hosts that know their user agent
/// through other means.
pub fn set_capability_probe(probe: CapabilityProbe) {
    let mut guard = CAPABILITY_PROBE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = probe;
}

/// Restores the built-in probe.
pub fn reset_capability_probe() {
    set_capability_probe(host_user_agent);
}

/// Runs the current probe.
pub fn detect_user_agent() -> Option<UserAgent> {
    let probe = *CAPABILITY_PROBE.lock().unwrap_or_else(|e| e.into_inner());
    probe()
}

/// Evaluates the capability gate against the current probe.
pub fn styling_supported() -> bool {
    let agent = detect_user_agent();
    let supported = supports_styling(agent.as_ref());
    if !supported {
        log::trace!("inline styles disabled for {:?}", agent);
    }
    supported
}

#[cfg(target_arch = "wasm32")]
fn host_user_agent() -> Option<UserAgent> {
    let header = web_sys::window()?.navigator().user_agent().ok()?;
    UserAgent::parse(&header)
}

#[cfg(not(target_arch = "wasm32"))]
fn host_user_agent() -> Option<UserAgent> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const IE10: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)";
    const IE11: &str = "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko";
    const FIREFOX_10: &str = "Mozilla/5.0 (Windows NT 6.1; rv:10.0) Gecko/20100101 Firefox/10.0";
    const FIREFOX_120: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
    const CHROME: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const EDGE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.61";
    const SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";

    #[test]
    fn test_parse_known_browsers() {
        assert_eq!(UserAgent::parse(IE10), Some(UserAgent::new("IE", Some("10.0"))));
        assert_eq!(UserAgent::parse(IE11), Some(UserAgent::new("IE", Some("11.0"))));
        assert_eq!(UserAgent::parse(FIREFOX_10), Some(UserAgent::new("Firefox", Some("10.0"))));
        assert_eq!(UserAgent::parse(CHROME).map(|ua| ua.name), Some("Chrome".into()));
        assert_eq!(UserAgent::parse(EDGE).map(|ua| ua.name), Some("Edge".into()));
        assert_eq!(UserAgent::parse(SAFARI), Some(UserAgent::new("Safari", Some("17.1"))));
        assert_eq!(UserAgent::parse("curl/8.4.0"), None);
    }

    #[test]
    fn test_gate_rejects_legacy_hosts() {
        assert!(!supports_styling(UserAgent::parse(IE10).as_ref()));
        assert!(!supports_styling(UserAgent::parse(IE11).as_ref()));
        assert!(!supports_styling(UserAgent::parse(FIREFOX_10).as_ref()));
        assert!(!supports_styling(Some(&UserAgent::new("Firefox", Some("11.0")))));
    }

    #[test]
    fn test_gate_accepts_modern_and_unknown_hosts() {
        assert!(supports_styling(UserAgent::parse(FIREFOX_120).as_ref()));
        assert!(supports_styling(UserAgent::parse(CHROME).as_ref()));
        assert!(supports_styling(Some(&UserAgent::new("Firefox", Some("12.0")))));
        assert!(supports_styling(Some(&UserAgent::new("Firefox", None))));
        assert!(supports_styling(None));
    }

    #[test]
    #[serial]
    fn test_probe_override_drives_auto_mode() {
        set_capability_probe(|| Some(UserAgent::new("IE", Some("9.0"))));
        assert!(!StyleMode::Auto.should_style());
        assert!(StyleMode::Always.should_style());

        set_capability_probe(|| None);
        assert!(StyleMode::Auto.should_style());
        assert!(!StyleMode::Never.should_style());

        reset_capability_probe();
    }
}
