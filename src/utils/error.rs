use crate::domain::model::VehicleId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("{}", not_found_message(.id))]
    NotFound { id: Option<VehicleId> },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{service} service error: {message}")]
    RemoteServiceError { service: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

fn not_found_message(id: &Option<VehicleId>) -> String {
    match id {
        Some(id) => format!("Vehicle with id {} does not exist", id),
        None => "Vehicle not found".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Remote,
    Storage,
    Configuration,
    Input,
}

impl VehicleError {
    pub fn not_found(id: VehicleId) -> Self {
        Self::NotFound { id: Some(id) }
    }

    pub fn remote(service: &str, message: impl Into<String>) -> Self {
        Self::RemoteServiceError {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::ApiError(_) | Self::RemoteServiceError { .. } => ErrorCategory::Remote,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { .. } => self.to_string(),
            Self::ApiError(e) if e.is_timeout() => {
                "A remote service did not answer in time".to_string()
            }
            Self::ApiError(_) | Self::RemoteServiceError { .. } => {
                format!("A remote service call failed: {}", self)
            }
            Self::IoError(_) | Self::SerializationError(_) => {
                format!("Could not access the vehicle store: {}", self)
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("Invalid configuration: {}", self),
            Self::ValidationError { message } => format!("Invalid vehicle: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Run `vehicles list` to see the stored ids",
            ErrorCategory::Remote => {
                "Check that the maps service is reachable or raise --address-timeout-secs"
            }
            ErrorCategory::Storage => "Check the data file path and that its content is valid JSON",
            ErrorCategory::Configuration => "Check the config file and command line flags",
            ErrorCategory::Input => "Fix the vehicle document and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, VehicleError>;
