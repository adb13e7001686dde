//! Call sites of the back-navigation resolver.
//!
//! [`BackHook`] serves back buttons drawn by the UI; [`HardwareBackListener`]
//! serves the system back button delivered by the native shell. Both read
//! history depth and host context from the same capability provider and
//! defer to [`navigation::resolve_back`].

use crate::listeners::{ListenerRegistry, Subscription};
use crate::navigation::{self, BackAction, BackRequest};
use crate::platform::{detect_context, Capabilities};
use std::sync::Arc;

/// Event delivered by the native shell when the system back button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareBackEvent {
    /// Route the UI router is showing when the button is pressed.
    pub current_path: String,
}

/// Back handling for UI back buttons.
pub struct BackHook<C> {
    caps: C,
}

impl<C: Capabilities> BackHook<C> {
    pub fn new(caps: C) -> Self {
        Self { caps }
    }

    /// Resolve a UI back press on `current_path`, optionally to an explicit route.
    pub fn go_back(&self, current_path: &str, override_path: Option<&str>) -> BackAction {
        let mut request = BackRequest::new(current_path).with_history(self.caps.history_length());
        if let Some(path) = override_path {
            request = request.with_override(path);
        }
        navigation::resolve_back(&request, detect_context(&self.caps).is_native())
    }
}

/// Back handling for the hardware back button.
pub struct HardwareBackListener<C> {
    caps: Arc<C>,
}

impl<C> Clone for HardwareBackListener<C> {
    fn clone(&self) -> Self {
        Self {
            caps: Arc::clone(&self.caps),
        }
    }
}

impl<C: Capabilities + Send + Sync + 'static> HardwareBackListener<C> {
    pub fn new(caps: C) -> Self {
        Self {
            caps: Arc::new(caps),
        }
    }

    /// Resolve a hardware back press on `current_path`.
    pub fn on_back_button(&self, current_path: &str) -> BackAction {
        let request = BackRequest::new(current_path)
            .with_history(self.caps.history_length())
            .from_hardware();
        navigation::resolve_back(&request, detect_context(self.caps.as_ref()).is_native())
    }

    /// Subscribe to `events`; every resolved action is passed to `apply`
    /// (the router or the app-exit hook). Dropping the guard detaches it.
    pub fn attach<F>(
        &self,
        events: &ListenerRegistry<HardwareBackEvent>,
        apply: F,
    ) -> Subscription
    where
        F: Fn(BackAction) + Send + Sync + 'static,
    {
        let listener = self.clone();
        events.register(move |event: &HardwareBackEvent| {
            apply(listener.on_back_button(&event.current_path));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Platform, StaticCapabilities};
    use std::sync::Mutex;

    #[test]
    fn hook_uses_history_when_available() {
        let caps = StaticCapabilities::browser("https://plattr.example").with_history(4);
        let hook = BackHook::new(caps);
        assert_eq!(hook.go_back("/dishes/snacks", None), BackAction::HistoryBack);
    }

    #[test]
    fn hook_override() {
        let caps = StaticCapabilities::browser("https://plattr.example").with_history(4);
        let hook = BackHook::new(caps);
        assert_eq!(
            hook.go_back("/thank-you", Some("/orders")),
            BackAction::Navigate("/orders".to_string())
        );
    }

    #[test]
    fn hook_and_listener_share_fallbacks() {
        let caps = StaticCapabilities::native(Platform::Android);
        let hook = BackHook::new(caps.clone());
        let listener = HardwareBackListener::new(caps);
        for path in ["/checkout", "/dishes/tiffins", "/order-detail/12", "/unknown"] {
            assert_eq!(hook.go_back(path, None), listener.on_back_button(path), "{path}");
        }
    }

    #[test]
    fn listener_exits_on_home() {
        let caps = StaticCapabilities::native(Platform::Android).with_history(3);
        let listener = HardwareBackListener::new(caps);
        assert_eq!(listener.on_back_button("/"), BackAction::ExitApp);
    }

    #[test]
    fn attached_listener_forwards_until_dropped() {
        let events = ListenerRegistry::new();
        let listener = HardwareBackListener::new(StaticCapabilities::native(Platform::Android));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let sub = listener.attach(&events, move |action| sink.lock().unwrap().push(action));

        events.dispatch(&HardwareBackEvent {
            current_path: "/dishes/snacks".to_string(),
        });
        events.dispatch(&HardwareBackEvent {
            current_path: "/".to_string(),
        });
        drop(sub);
        events.dispatch(&HardwareBackEvent {
            current_path: "/cart".to_string(),
        });

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                BackAction::Navigate("/categories/snacks".to_string()),
                BackAction::ExitApp,
            ]
        );
    }
}
