//! API endpoint resolution.
//!
//! In a browser the UI and backend share an origin, so request paths stay
//! relative. Inside the native shell there is no such origin and every request
//! needs an absolute backend URL.

use crate::config::ApiConfig;
use crate::platform::{detect_context, Capabilities, HostContext, Platform};

/// Host loopback as seen from the Android emulator.
pub const ANDROID_EMULATOR_HOST: &str = "10.0.2.2";

/// Loopback used by every other native platform.
pub const LOOPBACK_HOST: &str = "localhost";

/// Guarantee exactly one leading `/`. The rest of the path is left alone.
pub fn normalize_request_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Resolves request paths into URLs for the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct EndpointResolver {
    api: ApiConfig,
}

impl EndpointResolver {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    /// Backend base URL for a native build on `platform`, without trailing slash.
    pub fn native_base_url(&self, platform: Platform) -> String {
        match self.api.base_url.as_deref() {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let host = match platform {
                    Platform::Android => ANDROID_EMULATOR_HOST,
                    Platform::Ios | Platform::Web => LOOPBACK_HOST,
                };
                format!("http://{}:{}", host, self.api.dev_port)
            }
        }
    }

    /// URL for `path` given an already detected context.
    pub fn resolve_in(&self, context: HostContext, platform: Platform, path: &str) -> String {
        let normalized = normalize_request_path(path);
        match context {
            HostContext::Browser => normalized,
            HostContext::Native => format!("{}{}", self.native_base_url(platform), normalized),
        }
    }

    /// URL for `path` on the host described by `caps`.
    pub fn resolve(&self, caps: &dyn Capabilities, path: &str) -> String {
        let context = detect_context(caps);
        let url = self.resolve_in(context, caps.platform(), path);
        tracing::debug!(
            path,
            url = %url,
            context = %context,
            origin = %caps.origin(),
            "resolved api url"
        );
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::StaticCapabilities;

    fn with_override(base: &str) -> EndpointResolver {
        EndpointResolver::new(ApiConfig {
            base_url: Some(base.to_string()),
            ..ApiConfig::default()
        })
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_request_path("categories/tiffins"), "/categories/tiffins");
        assert_eq!(normalize_request_path("/categories/tiffins"), "/categories/tiffins");
        assert_eq!(normalize_request_path("///api/menu"), "/api/menu");
        assert_eq!(normalize_request_path(""), "/");
        assert_eq!(normalize_request_path("api/menu?day=mon"), "/api/menu?day=mon");
    }

    #[test]
    fn browser_returns_relative_path() {
        let resolver = EndpointResolver::default();
        let caps = StaticCapabilities::browser("https://plattr.example");
        assert_eq!(resolver.resolve(&caps, "categories/tiffins"), "/categories/tiffins");
        assert_eq!(resolver.resolve(&caps, "/api/orders"), "/api/orders");
    }

    #[test]
    fn browser_ignores_override() {
        let resolver = with_override("https://api.plattr.example");
        let caps = StaticCapabilities::browser("https://plattr.example");
        assert_eq!(resolver.resolve(&caps, "api/orders"), "/api/orders");
    }

    #[test]
    fn android_defaults_to_emulator_loopback() {
        let resolver = EndpointResolver::default();
        let caps = StaticCapabilities::native(Platform::Android);
        assert_eq!(
            resolver.resolve(&caps, "categories/tiffins"),
            "http://10.0.2.2:3000/categories/tiffins"
        );
    }

    #[test]
    fn ios_defaults_to_localhost() {
        let resolver = EndpointResolver::default();
        let caps = StaticCapabilities::native(Platform::Ios);
        assert_eq!(resolver.resolve(&caps, "/api/menu"), "http://localhost:3000/api/menu");
    }

    #[test]
    fn dev_port_is_configurable() {
        let resolver = EndpointResolver::new(ApiConfig {
            base_url: None,
            dev_port: 4000,
        });
        assert_eq!(resolver.native_base_url(Platform::Android), "http://10.0.2.2:4000");
    }

    #[test]
    fn override_wins_on_every_platform() {
        let resolver = with_override("https://api.plattr.example");
        for platform in [Platform::Android, Platform::Ios, Platform::Web] {
            let caps = StaticCapabilities::native(platform);
            assert_eq!(
                resolver.resolve(&caps, "api/cart"),
                "https://api.plattr.example/api/cart"
            );
        }
    }

    #[test]
    fn override_trailing_slash_is_not_doubled() {
        let resolver = with_override("https://api.plattr.example/v1/");
        assert_eq!(
            resolver.resolve_in(HostContext::Native, Platform::Ios, "/menu"),
            "https://api.plattr.example/v1/menu"
        );
    }
}
