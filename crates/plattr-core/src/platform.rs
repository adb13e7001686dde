//! Host capability detection.
//!
//! The resolvers never look at global runtime state. Everything they need to
//! know about the host (native shell or browser, which OS, how deep the
//! history stack is) comes through the [`Capabilities`] trait, so tests and
//! the CLI can describe a host as plain data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OS platform reported by the mobile runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Web,
}

impl Platform {
    /// Parse a runtime platform name. Unknown names map to `Web`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            _ => Platform::Web,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the UI is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostContext {
    Native,
    Browser,
}

impl HostContext {
    pub fn is_native(&self) -> bool {
        matches!(self, HostContext::Native)
    }
}

impl fmt::Display for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostContext::Native => f.write_str("native"),
            HostContext::Browser => f.write_str("browser"),
        }
    }
}

/// Capability provider supplied by the host environment.
pub trait Capabilities {
    /// The runtime's own "is native platform" answer; `None` when no runtime
    /// API is loaded.
    fn native_flag(&self) -> Option<bool>;

    /// Whether the mobile runtime bridge object is present at all.
    fn has_runtime_bridge(&self) -> bool;

    /// Origin of the current page, e.g. `capacitor://localhost`.
    fn origin(&self) -> String;

    fn platform(&self) -> Platform;

    /// Number of entries in the host navigation history.
    fn history_length(&self) -> usize;
}

/// Schemes served by ordinary browsers. Anything else is an app scheme.
const WEB_SCHEMES: &[&str] = &["http", "https", "file"];

/// True when `origin` uses a custom app scheme such as `capacitor://`.
fn has_app_scheme(origin: &str) -> bool {
    match origin.split_once("://") {
        Some((scheme, _)) if !scheme.is_empty() => {
            let scheme = scheme.to_ascii_lowercase();
            !WEB_SCHEMES.contains(&scheme.as_str())
        }
        _ => false,
    }
}

/// Decide whether we run inside a native shell or a plain browser.
///
/// Order: the runtime's native flag if it says `true`, then the bridge +
/// app-scheme heuristic, otherwise browser.
pub fn detect_context(caps: &dyn Capabilities) -> HostContext {
    if caps.native_flag() == Some(true) {
        return HostContext::Native;
    }
    if caps.has_runtime_bridge() && has_app_scheme(&caps.origin()) {
        return HostContext::Native;
    }
    HostContext::Browser
}

/// Plain-data capability provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCapabilities {
    pub native_flag: Option<bool>,
    pub runtime_bridge: bool,
    pub origin: String,
    pub platform: Platform,
    pub history_length: usize,
}

impl StaticCapabilities {
    /// A desktop or mobile browser serving the app over http.
    pub fn browser(origin: &str) -> Self {
        Self {
            native_flag: None,
            runtime_bridge: false,
            origin: origin.to_string(),
            platform: Platform::Web,
            history_length: 1,
        }
    }

    /// A native shell on `platform` that reports itself as native.
    pub fn native(platform: Platform) -> Self {
        let origin = match platform {
            Platform::Android => "http://localhost",
            _ => "capacitor://localhost",
        };
        Self {
            native_flag: Some(true),
            runtime_bridge: true,
            origin: origin.to_string(),
            platform,
            history_length: 1,
        }
    }

    pub fn with_history(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }
}

impl Default for StaticCapabilities {
    fn default() -> Self {
        Self::browser("http://localhost:3000")
    }
}

impl Capabilities for StaticCapabilities {
    fn native_flag(&self) -> Option<bool> {
        self.native_flag
    }

    fn has_runtime_bridge(&self) -> bool {
        self.runtime_bridge
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn history_length(&self) -> usize {
        self.history_length
    }
}
