use super::toml_config::TomlConfig;
use super::Settings;
use crate::core::VehicleId;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicles")]
#[command(about = "Manage vehicles and look up their live price and address")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub pricing_endpoint: Option<String>,

    #[arg(long, global = true)]
    pub maps_endpoint: Option<String>,

    #[arg(long, global = true, help = "JSON file holding the vehicles")]
    pub data_file: Option<String>,

    #[arg(long, global = true)]
    pub price_timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    pub address_timeout_secs: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List every stored vehicle
    List,
    /// Show one vehicle with its current price and address
    Get { id: VehicleId },
    /// Create a vehicle, or update it when the document carries an id
    Save {
        /// Vehicle JSON document; read from stdin when omitted
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Delete a vehicle
    Delete { id: VehicleId },
}

impl CliConfig {
    /// Defaults, overlaid with `--config`, overlaid with explicit flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Settings::from_toml(&toml)
            }
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.pricing_endpoint {
            settings.pricing_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.maps_endpoint {
            settings.maps_endpoint = endpoint.clone();
        }
        if let Some(data_file) = &self.data_file {
            settings.data_file = Some(data_file.clone());
        }
        if let Some(timeout) = self.price_timeout_secs {
            settings.price_timeout_seconds = timeout;
        }
        if let Some(timeout) = self.address_timeout_secs {
            settings.address_timeout_seconds = timeout;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}
