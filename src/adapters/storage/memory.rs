use super::VehicleTable;
use crate::core::{Result, Vehicle, VehicleId, VehicleStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    table: Arc<RwLock<VehicleTable>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>> {
        Ok(self.table.read().await.get(id))
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle> {
        self.table.write().await.upsert(vehicle)
    }

    async fn delete(&self, vehicle: &Vehicle) -> Result<()> {
        if let Some(id) = vehicle.id {
            self.table.write().await.remove(id);
        }
        Ok(())
    }
}
