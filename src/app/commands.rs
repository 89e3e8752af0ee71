use crate::adapters::clock::SystemClock;
use crate::adapters::http::{build_client, MapsClient, PricingClient};
use crate::adapters::storage::{InMemoryStore, JsonFileStore};
use crate::config::Settings;
use crate::core::vehicle_service::VehicleService;
use crate::core::{AddressClient, ConfigProvider, PriceClient, Vehicle, VehicleId, VehicleStore};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::Validate;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

pub type SharedStore = Arc<dyn VehicleStore>;
pub type CliService = VehicleService<SharedStore, PricingClient, MapsClient>;

/// What a command asks the service to do, with its input already loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List,
    Get(VehicleId),
    Save(Vehicle),
    Delete(VehicleId),
}

pub async fn open_store<C: ConfigProvider>(config: &C) -> Result<SharedStore> {
    match config.data_file() {
        Some(path) => Ok(Arc::new(JsonFileStore::open(path).await?)),
        None => {
            tracing::warn!("No data file configured, vehicles will not outlive this process");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

pub async fn build_service(settings: &Settings) -> Result<CliService> {
    let store = open_store(settings).await?;
    let client = build_client()?;
    Ok(VehicleService::new(
        store,
        PricingClient::from_config(client.clone(), settings),
        MapsClient::from_config(client, settings),
        Arc::new(SystemClock),
    ))
}

/// Parses and validates a vehicle document.
pub fn parse_vehicle(document: &str) -> Result<Vehicle> {
    let vehicle: Vehicle =
        serde_json::from_str(document).map_err(|e| VehicleError::ValidationError {
            message: format!("not a vehicle document: {}", e),
        })?;
    vehicle.validate()?;
    Ok(vehicle)
}

/// Loads a vehicle document from `path`, or from stdin when `path` is `None`.
pub async fn read_vehicle(path: Option<&str>) -> Result<Vehicle> {
    let document = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };
    parse_vehicle(&document)
}

/// Runs one action and renders its result for the terminal.
pub async fn execute<S, P, A>(service: &VehicleService<S, P, A>, action: Action) -> Result<String>
where
    S: VehicleStore,
    P: PriceClient,
    A: AddressClient,
{
    match action {
        Action::List => {
            let vehicles = service.list().await?;
            Ok(serde_json::to_string_pretty(&vehicles)?)
        }
        Action::Get(id) => {
            let vehicle = service.find_by_id(id).await?;
            Ok(serde_json::to_string_pretty(&vehicle)?)
        }
        Action::Save(vehicle) => {
            let saved = service.save(vehicle).await?;
            Ok(serde_json::to_string_pretty(&saved)?)
        }
        Action::Delete(id) => {
            service.delete(id).await?;
            Ok(format!("Deleted vehicle {}", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vehicle_rejects_garbage() {
        let err = parse_vehicle("{\"location\": 3}").unwrap_err();
        assert!(matches!(err, VehicleError::ValidationError { .. }));
    }

    #[test]
    fn test_parse_vehicle_rejects_bad_coordinates() {
        let err = parse_vehicle(r#"{"location": {"lat": 10.0, "lon": 200.0}}"#).unwrap_err();
        assert!(err.to_string().contains("location.lon"));
    }

    #[tokio::test]
    async fn test_read_vehicle_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("car.json");
        std::fs::write(
            &path,
            r#"{"condition": "NEW", "details": {"model": "Impala"}, "location": {"lat": 40.0, "lon": -74.0}}"#,
        )
        .unwrap();

        let vehicle = read_vehicle(path.to_str()).await.unwrap();

        assert_eq!(vehicle.details.model.as_deref(), Some("Impala"));
        assert_eq!(vehicle.condition, crate::core::Condition::New);
    }

    #[tokio::test]
    async fn test_open_store_without_data_file_is_in_memory() {
        let store = open_store(&Settings::default()).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
