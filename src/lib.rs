pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::http::{MapsClient, PricingClient};
pub use adapters::storage::{InMemoryStore, JsonFileStore};
pub use config::Settings;
pub use core::vehicle_service::VehicleService;
pub use utils::error::{ErrorCategory, Result, VehicleError};
