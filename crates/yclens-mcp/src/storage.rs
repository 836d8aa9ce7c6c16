//! Disk and snapshot tools.

use crate::error::{Result, ToolError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use yclens_api::CloudInspect;
use yclens_api::compute::{Disk, Snapshot};

#[derive(Debug, Serialize)]
pub struct DiskSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub status: String,
    pub type_id: String,
    pub zone_id: String,
    pub size: i64,
    pub block_size: i64,
    pub source_image_id: Option<String>,
    pub source_snapshot_id: Option<String>,
    /// Instances the disk is currently attached to.
    pub instance_ids: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Disk> for DiskSummary {
    fn from(disk: Disk) -> Self {
        Self {
            id: disk.id,
            name: disk.name,
            description: disk.description,
            folder_id: disk.folder_id,
            status: disk.status,
            type_id: disk.type_id,
            zone_id: disk.zone_id,
            size: disk.size,
            block_size: disk.block_size,
            source_image_id: none_if_empty(disk.source_image_id),
            source_snapshot_id: none_if_empty(disk.source_snapshot_id),
            instance_ids: disk.instance_ids,
            created_at: disk.created_at,
        }
    }
}

/// Detail view: the summary plus placement and labels.
#[derive(Debug, Serialize)]
pub struct DiskConfig {
    #[serde(flatten)]
    pub summary: DiskSummary,
    pub product_ids: Vec<String>,
    pub placement_group_id: Option<String>,
    pub placement_group_partition: Option<i64>,
    pub labels: HashMap<String, String>,
}

impl From<Disk> for DiskConfig {
    fn from(disk: Disk) -> Self {
        let product_ids = disk.product_ids.clone();
        let labels = disk.labels.clone();
        let placement = disk.disk_placement_policy.clone();
        Self {
            summary: DiskSummary::from(disk),
            product_ids,
            placement_group_id: placement
                .as_ref()
                .map(|p| p.placement_group_id.clone())
                .filter(|id| !id.is_empty()),
            placement_group_partition: placement.map(|p| p.placement_group_partition),
            labels,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SnapshotSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub status: String,
    pub storage_size: i64,
    pub disk_size: i64,
    pub source_disk_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Snapshot> for SnapshotSummary {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            description: snapshot.description,
            folder_id: snapshot.folder_id,
            status: snapshot.status,
            storage_size: snapshot.storage_size,
            disk_size: snapshot.disk_size,
            source_disk_id: snapshot.source_disk_id,
            created_at: snapshot.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SnapshotConfig {
    #[serde(flatten)]
    pub summary: SnapshotSummary,
    pub product_ids: Vec<String>,
    pub labels: HashMap<String, String>,
}

impl From<Snapshot> for SnapshotConfig {
    fn from(snapshot: Snapshot) -> Self {
        let product_ids = snapshot.product_ids.clone();
        let labels = snapshot.labels.clone();
        Self {
            summary: SnapshotSummary::from(snapshot),
            product_ids,
            labels,
        }
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

pub async fn list_disks(api: &dyn CloudInspect, folder_id: &str) -> Result<Vec<DiskSummary>> {
    let disks = api
        .list_disks(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list disks in folder {folder_id}"), e))?;
    tracing::info!(count = disks.len(), folder_id, "listed disks");
    Ok(disks.into_iter().map(DiskSummary::from).collect())
}

pub async fn get_disk_config(api: &dyn CloudInspect, disk_id: &str) -> Result<DiskConfig> {
    let disk = api
        .get_disk(disk_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve disk {disk_id}"), e))?;
    Ok(DiskConfig::from(disk))
}

pub async fn list_snapshots(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<SnapshotSummary>> {
    let snapshots = api
        .list_snapshots(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list snapshots in folder {folder_id}"), e))?;
    Ok(snapshots.into_iter().map(SnapshotSummary::from).collect())
}

pub async fn get_snapshot_config(
    api: &dyn CloudInspect,
    snapshot_id: &str,
) -> Result<SnapshotConfig> {
    let snapshot = api
        .get_snapshot(snapshot_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve snapshot {snapshot_id}"), e))?;
    Ok(SnapshotConfig::from(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubCloud;

    #[test]
    fn disk_summary_hides_empty_sources() {
        let stub = StubCloud {
            disks: vec![Disk {
                id: "epddisk1".to_string(),
                name: "data".to_string(),
                size: 107_374_182_400,
                source_image_id: "fd8img".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let disks = tokio_test::block_on(list_disks(&stub, "b1gabc2def3ghi4jkl5m")).unwrap();
        assert_eq!(disks.len(), 1);
        assert_eq!(disks[0].size, 107_374_182_400);
        assert_eq!(disks[0].source_image_id.as_deref(), Some("fd8img"));
        assert!(disks[0].source_snapshot_id.is_none());
    }

    #[test]
    fn missing_snapshot_reports_the_id() {
        let stub = StubCloud::default();
        let err =
            tokio_test::block_on(get_snapshot_config(&stub, "fd8missing")).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Failed to retrieve snapshot fd8missing")
        );
    }
}
