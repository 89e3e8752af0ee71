use crate::domain::model::{Address, Price, Vehicle, VehicleId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Keyed persistence for vehicles. Implementations own their locking; the
/// service calls them concurrently.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vehicle>>;
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>>;
    /// Inserts when `vehicle.id` is `None` (assigning a fresh id), upserts otherwise.
    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle>;
    async fn delete(&self, vehicle: &Vehicle) -> Result<()>;
}

#[async_trait]
pub trait PriceClient: Send + Sync {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<Price>;
}

#[async_trait]
pub trait AddressClient: Send + Sync {
    async fn get_address(&self, lat: f64, lon: f64) -> Result<Address>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait ConfigProvider: Send + Sync {
    fn pricing_endpoint(&self) -> &str;
    fn maps_endpoint(&self) -> &str;
    fn price_timeout(&self) -> Duration;
    fn address_timeout(&self) -> Duration;
    fn data_file(&self) -> Option<&str>;
}

#[async_trait]
impl<T: VehicleStore + ?Sized> VehicleStore for std::sync::Arc<T> {
    async fn find_all(&self) -> Result<Vec<Vehicle>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle> {
        (**self).save(vehicle).await
    }

    async fn delete(&self, vehicle: &Vehicle) -> Result<()> {
        (**self).delete(vehicle).await
    }
}
