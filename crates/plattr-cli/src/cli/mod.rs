//! CLI for exercising the Plattr resolvers outside a device.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use plattr_core::config;
use plattr_core::platform::{Platform, StaticCapabilities};

use commands::{run_back, run_config, run_endpoint, run_routes};

/// Top-level CLI for the Plattr client core.
#[derive(Debug, Parser)]
#[command(name = "plattr")]
#[command(about = "Plattr: back-navigation and API endpoint resolution", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Description of the simulated host.
#[derive(Debug, Clone, Args)]
pub struct HostArgs {
    /// Simulate the native mobile shell instead of a browser.
    #[arg(long)]
    pub native: bool,

    /// OS platform reported by the runtime (android, ios, web).
    #[arg(long, default_value = "web", value_parser = parse_platform)]
    pub platform: Platform,

    /// Page origin; defaults to the usual origin for the chosen host.
    #[arg(long)]
    pub origin: Option<String>,

    /// Entries in the host history stack.
    #[arg(long, default_value = "1", value_name = "N")]
    pub history: usize,
}

impl HostArgs {
    pub fn capabilities(&self) -> StaticCapabilities {
        let mut caps = if self.native {
            StaticCapabilities::native(self.platform)
        } else {
            StaticCapabilities::browser("http://localhost:5173")
        };
        if let Some(origin) = &self.origin {
            caps.origin = origin.clone();
        }
        caps.with_history(self.history)
    }
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    match s.to_ascii_lowercase().as_str() {
        "android" | "ios" | "web" => Ok(Platform::from_name(s)),
        other => Err(format!("unknown platform {other:?} (expected android, ios or web)")),
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a back action for the given route.
    Back {
        /// Current route path, e.g. /dishes/snacks.
        path: String,

        /// Explicit destination supplied by the caller.
        #[arg(long = "to", value_name = "PATH")]
        override_path: Option<String>,

        /// Treat the press as the hardware back button.
        #[arg(long)]
        hardware: bool,

        #[command(flatten)]
        host: HostArgs,

        /// Print the action as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve the request URL for an API path.
    Endpoint {
        /// Request path, with or without a leading slash.
        path: String,

        /// Backend base URL for this call (takes precedence over config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        #[command(flatten)]
        host: HostArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the back-navigation table and pattern rules.
    Routes,

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Only `endpoint` and `config` read configuration; they validate it themselves.
        match cli.command {
            CliCommand::Back {
                path,
                override_path,
                hardware,
                host,
                json,
            } => run_back(&path, override_path.as_deref(), hardware, &host, json)?,
            CliCommand::Endpoint {
                path,
                base_url,
                host,
                json,
            } => {
                let cfg = config::read_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_endpoint(&cfg, &path, base_url, &host, json)?;
            }
            CliCommand::Routes => run_routes(),
            CliCommand::Config => run_config(&config::read_or_init()?)?,
        }

        Ok(())
    }
}
