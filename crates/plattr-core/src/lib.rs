pub mod config;
pub mod error;
pub mod logging;

pub mod back_button;
pub mod endpoint;
pub mod focus;
pub mod listeners;
pub mod navigation;
pub mod platform;
pub mod routes;
