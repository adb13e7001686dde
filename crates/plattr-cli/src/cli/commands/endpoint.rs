//! `plattr endpoint <path>` – resolve an API request URL.

use crate::cli::HostArgs;
use anyhow::Result;
use plattr_core::config::PlattrConfig;
use plattr_core::endpoint::EndpointResolver;
use plattr_core::platform::detect_context;

/// Resolve `path` for the simulated host. `--base-url` replaces whatever the
/// file or environment configured, and only the value actually used is validated.
pub fn resolve_endpoint(
    cfg: &PlattrConfig,
    path: &str,
    base_url: Option<String>,
    host: &HostArgs,
) -> Result<String> {
    let mut api = cfg.api.clone();
    if let Some(url) = base_url {
        api.base_url = Some(url);
    }
    api.validate()?;
    Ok(EndpointResolver::new(api).resolve(&host.capabilities(), path))
}

pub fn run_endpoint(
    cfg: &PlattrConfig,
    path: &str,
    base_url: Option<String>,
    host: &HostArgs,
    json: bool,
) -> Result<()> {
    let url = resolve_endpoint(cfg, path, base_url, host)?;

    if json {
        let caps = host.capabilities();
        let out = serde_json::json!({
            "path": path,
            "url": url,
            "context": detect_context(&caps),
            "platform": caps.platform,
            "origin": caps.origin,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plattr_core::platform::Platform;

    fn android() -> HostArgs {
        HostArgs {
            native: true,
            platform: Platform::Android,
            origin: None,
            history: 1,
        }
    }

    fn config_with_bad_env_value() -> PlattrConfig {
        let mut cfg = PlattrConfig::default();
        cfg.api.apply_env_override(Some("not-a-url".to_string()));
        cfg
    }

    #[test]
    fn base_url_flag_replaces_bad_configured_value() {
        let cfg = config_with_bad_env_value();
        let flag = Some("https://ok.example".to_string());
        let url = resolve_endpoint(&cfg, "menu", flag, &android()).unwrap();
        assert_eq!(url, "https://ok.example/menu");
    }

    #[test]
    fn bad_configured_value_is_reported_without_flag() {
        let cfg = config_with_bad_env_value();
        let err = resolve_endpoint(&cfg, "menu", None, &android()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid API base URL \"not-a-url\": relative URL without a base"
        );
    }

    #[test]
    fn bad_base_url_flag_is_rejected() {
        let cfg = PlattrConfig::default();
        let flag = Some("ftp://x.example".to_string());
        let err = resolve_endpoint(&cfg, "menu", flag, &android()).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn default_config_uses_emulator_loopback() {
        let url = resolve_endpoint(&PlattrConfig::default(), "/menu", None, &android()).unwrap();
        assert_eq!(url, "http://10.0.2.2:3000/menu");
    }
}
