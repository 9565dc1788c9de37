pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FleetConfig, FleetSettings, LocalStorage};
pub use core::client::ApiClient;
pub use utils::error::{FleetError, Result};
