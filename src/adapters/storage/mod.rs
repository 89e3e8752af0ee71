pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::core::{Result, Vehicle, VehicleId};
use crate::utils::error::VehicleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rows keyed by id plus the id sequence. Shared by the in-memory and file
/// backed stores.
#[derive(Debug, Clone, Default)]
pub(crate) struct VehicleTable {
    last_id: VehicleId,
    rows: BTreeMap<VehicleId, Vehicle>,
}

impl VehicleTable {
    pub(crate) fn all(&self) -> Vec<Vehicle> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: VehicleId) -> Option<Vehicle> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn upsert(&mut self, mut vehicle: Vehicle) -> Result<Vehicle> {
        let id = match vehicle.id {
            Some(id) => id,
            None => self.next_id()?,
        };
        self.last_id = self.last_id.max(id);

        vehicle.id = Some(id);
        vehicle.price = None;
        self.rows.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    fn next_id(&self) -> Result<VehicleId> {
        self.last_id
            .checked_add(1)
            .ok_or_else(|| VehicleError::ValidationError {
                message: format!("vehicle id sequence is exhausted at {}", self.last_id),
            })
    }

    pub(crate) fn remove(&mut self, id: VehicleId) -> bool {
        self.rows.remove(&id).is_some()
    }
}

/// On-disk layout of [`VehicleTable`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableSnapshot {
    #[serde(default)]
    last_id: VehicleId,
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

impl From<&VehicleTable> for TableSnapshot {
    fn from(table: &VehicleTable) -> Self {
        Self {
            last_id: table.last_id,
            vehicles: table.all(),
        }
    }
}

impl TryFrom<TableSnapshot> for VehicleTable {
    type Error = VehicleError;

    fn try_from(snapshot: TableSnapshot) -> Result<Self> {
        let mut table = VehicleTable {
            last_id: snapshot.last_id,
            rows: BTreeMap::new(),
        };
        for vehicle in snapshot.vehicles {
            // Rows without an id get one from the sequence.
            table.upsert(vehicle)?;
        }
        Ok(table)
    }
}
