//! Back-navigation resolver.
//!
//! Decides what a "back" action does: pop the host history, navigate to an
//! explicit fallback route, or (hardware button on the home screen of the
//! native app) exit. Pure function of its inputs.

use crate::routes::{self, ROOT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which call site triggered the back action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackOrigin {
    /// A back button rendered by the UI.
    #[default]
    UiButton,
    /// The Android hardware/system back button, delivered by the native shell.
    HardwareButton,
}

/// Inputs for a single back-navigation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackRequest {
    pub current_path: String,
    /// Number of entries in the host history stack.
    pub history_length: usize,
    /// Explicit destination from the caller; bypasses history and the route table.
    pub override_path: Option<String>,
    pub origin: BackOrigin,
}

impl BackRequest {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            history_length: 1,
            override_path: None,
            origin: BackOrigin::UiButton,
        }
    }

    pub fn with_history(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }

    pub fn with_override(mut self, path: impl Into<String>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn from_hardware(mut self) -> Self {
        self.origin = BackOrigin::HardwareButton;
        self
    }
}

/// Outcome of a back-navigation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum BackAction {
    /// Let the host pop its own history stack.
    HistoryBack,
    /// Navigate to this route.
    Navigate(String),
    /// Close the app (hardware back on the native home screen).
    ExitApp,
}

impl fmt::Display for BackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackAction::HistoryBack => write!(f, "history-back"),
            BackAction::Navigate(path) => write!(f, "navigate {}", path),
            BackAction::ExitApp => write!(f, "exit-app"),
        }
    }
}

/// Route to fall back to when history is unusable: exact table hit, then
/// pattern rules, then root.
pub fn fallback_destination(current_path: &str) -> String {
    let path = routes::normalize_route(current_path);
    if let Some(to) = routes::lookup(&path) {
        return to.to_string();
    }
    routes::match_pattern(&path).unwrap_or_else(|| ROOT.to_string())
}

/// Resolve a back action.
///
/// `is_native` is the detected host context; it only matters for the
/// hardware-button exit on the root route.
pub fn resolve_back(request: &BackRequest, is_native: bool) -> BackAction {
    let action = if request.origin == BackOrigin::HardwareButton
        && is_native
        && routes::is_root(&request.current_path)
    {
        BackAction::ExitApp
    } else if let Some(path) = &request.override_path {
        BackAction::Navigate(path.clone())
    } else if request.history_length > 1 {
        BackAction::HistoryBack
    } else {
        BackAction::Navigate(fallback_destination(&request.current_path))
    };

    tracing::debug!(
        path = %request.current_path,
        history = request.history_length,
        origin = ?request.origin,
        native = is_native,
        action = %action,
        "resolved back navigation"
    );
    action
}
