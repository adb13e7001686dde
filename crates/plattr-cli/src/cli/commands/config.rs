//! `plattr config` – show where configuration lives and what is in effect.

use anyhow::Result;
use plattr_core::config::{self, PlattrConfig, BASE_URL_ENV};
use plattr_core::logging;

pub fn run_config(cfg: &PlattrConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("log file:    {}", logging::log_file_path()?.display());
    match &cfg.api.base_url {
        Some(url) => println!("api.base_url: {} (set {} to override)", url, BASE_URL_ENV),
        None => println!("api.base_url: <unset, loopback default for native builds>"),
    }
    println!("api.dev_port: {}", cfg.api.dev_port);
    if let Err(err) = cfg.api.validate() {
        println!("warning: {}", err);
    }
    Ok(())
}
