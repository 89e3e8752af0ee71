use crate::core::{AddressClient, Clock, PriceClient, Vehicle, VehicleId, VehicleStore};
use crate::domain::model::Price;
use crate::utils::error::{Result, VehicleError};
use std::sync::Arc;

/// Creates, reads, updates and deletes vehicles, and gathers the related
/// price and address data on single-vehicle reads.
pub struct VehicleService<S: VehicleStore, P: PriceClient, A: AddressClient> {
    store: S,
    prices: P,
    maps: A,
    clock: Arc<dyn Clock>,
}

impl<S: VehicleStore, P: PriceClient, A: AddressClient> VehicleService<S, P, A> {
    pub fn new(store: S, prices: P, maps: A, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            prices,
            maps,
            clock,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>> {
        let vehicles = self.store.find_all().await?;
        tracing::debug!("Listed {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    /// Returns the vehicle with its current price and address.
    ///
    /// A failing pricing service only leaves `price` unset. A failing maps
    /// service fails the whole read.
    pub async fn find_by_id(&self, id: VehicleId) -> Result<Vehicle> {
        let mut vehicle = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| VehicleError::not_found(id))?;

        if let Some(price) = self.price_for(id).await {
            vehicle.price = Some(price.to_plain_string());
        }

        let address = self
            .maps
            .get_address(vehicle.location.lat, vehicle.location.lon)
            .await?;
        vehicle.location.apply_address(address);

        Ok(vehicle)
    }

    /// Creates the vehicle when it has no id, otherwise updates the stored
    /// vehicle's details and location. Updates leave every other stored
    /// field, timestamps included, as they were.
    pub async fn save(&self, vehicle: Vehicle) -> Result<Vehicle> {
        if let Some(id) = vehicle.id {
            let mut existing = self
                .store
                .find_by_id(id)
                .await?
                .ok_or_else(|| VehicleError::not_found(id))?;

            existing.details = vehicle.details;
            existing.location = vehicle.location;
            existing.price = None;

            let updated = self.store.save(existing).await?;
            tracing::info!("Updated vehicle {}", id);
            return Ok(updated);
        }

        let now = self.clock.now();
        let mut vehicle = vehicle;
        vehicle.created_at = Some(now);
        vehicle.modified_at = Some(now);
        vehicle.price = None;

        let created = self.store.save(vehicle).await?;
        tracing::info!("Created vehicle {:?}", created.id);
        Ok(created)
    }

    pub async fn delete(&self, id: VehicleId) -> Result<()> {
        let vehicle = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| VehicleError::not_found(id))?;

        self.store.delete(&vehicle).await?;
        tracing::info!("Deleted vehicle {}", id);
        Ok(())
    }

    async fn price_for(&self, id: VehicleId) -> Option<Price> {
        match self.prices.get_price(id).await {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::warn!("Price lookup for vehicle {} failed: {}", id, e);
                None
            }
        }
    }
}
