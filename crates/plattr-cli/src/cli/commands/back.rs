//! `plattr back <path>` – resolve a back action.

use crate::cli::HostArgs;
use anyhow::Result;
use plattr_core::back_button::{BackHook, HardwareBackListener};

pub fn run_back(
    path: &str,
    override_path: Option<&str>,
    hardware: bool,
    host: &HostArgs,
    json: bool,
) -> Result<()> {
    let caps = host.capabilities();
    let action = if hardware {
        if override_path.is_some() {
            tracing::warn!("--to is ignored for hardware back presses");
        }
        HardwareBackListener::new(caps).on_back_button(path)
    } else {
        BackHook::new(caps).go_back(path, override_path)
    };

    if json {
        println!("{}", serde_json::to_string(&action)?);
    } else {
        println!("{}", action);
    }
    Ok(())
}
