use super::{TableSnapshot, VehicleTable};
use crate::core::{Result, Vehicle, VehicleId, VehicleStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::{fs, sync::RwLock};

/// Store persisted as a single JSON document.
///
/// The whole table is kept in memory. Every mutation is applied to a copy,
/// written to a staging file next to the store and renamed over it while the
/// write lock is held. The in-memory table only moves forward once the rename
/// succeeds, so a failed write leaves both memory and disk as they were.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    table: Arc<RwLock<VehicleTable>>,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty file if none exists.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let file_path = path.into();

        let table = if fs::try_exists(&file_path).await? {
            let bytes = fs::read(&file_path).await?;
            let snapshot: TableSnapshot = serde_json::from_slice(&bytes)?;
            VehicleTable::try_from(snapshot)?
        } else {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
            let table = VehicleTable::default();
            write_table(&file_path, &table).await?;
            table
        };

        tracing::debug!("Opened vehicle store at {}", file_path.display());
        Ok(Self {
            table: Arc::new(RwLock::new(table)),
            file_path,
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

async fn write_table(path: &Path, table: &VehicleTable) -> Result<()> {
    let data = serde_json::to_vec_pretty(&TableSnapshot::from(table))?;
    let staging = staging_path(path);
    fs::write(&staging, data).await?;

    if let Err(e) = fs::rename(&staging, path).await {
        if let Err(cleanup) = fs::remove_file(&staging).await {
            tracing::warn!("Could not remove {}: {}", staging.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl VehicleStore for JsonFileStore {
    async fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>> {
        Ok(self.table.read().await.get(id))
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let saved = next.upsert(vehicle)?;
        write_table(&self.file_path, &next).await?;
        *table = next;
        Ok(saved)
    }

    async fn delete(&self, vehicle: &Vehicle) -> Result<()> {
        let Some(id) = vehicle.id else {
            return Ok(());
        };

        let mut table = self.table.write().await;
        let mut next = table.clone();
        if next.remove(id) {
            write_table(&self.file_path, &next).await?;
            *table = next;
        }
        Ok(())
    }
}
