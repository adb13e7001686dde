//! CLI command handlers, one file per command.

mod back;
mod config;
mod endpoint;
mod routes;

pub use back::run_back;
pub use config::run_config;
pub use endpoint::run_endpoint;
pub use routes::run_routes;
