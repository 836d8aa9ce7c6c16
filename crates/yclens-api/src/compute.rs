//! Compute service: instances, images, zones, disk types, disks,
//! snapshots.

use crate::client::{COMPUTE_API_BASE, YcClient, list_envelope};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A virtual machine instance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub zone_id: String,
    pub platform_id: String,
    pub resources: Option<Resources>,
    pub status: String,
    pub metadata: HashMap<String, String>,
    pub fqdn: String,
    pub boot_disk: Option<AttachedDisk>,
    pub secondary_disks: Vec<AttachedDisk>,
    pub network_interfaces: Vec<NetworkInterface>,
    pub service_account_id: String,
    pub network_settings: Option<NetworkSettings>,
    pub placement_policy: Option<PlacementPolicy>,
    pub scheduling_policy: Option<SchedulingPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub memory: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub cores: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub core_fraction: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub gpus: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachedDisk {
    pub mode: String,
    pub device_name: String,
    pub auto_delete: bool,
    pub disk_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterface {
    pub index: String,
    pub mac_address: String,
    pub subnet_id: String,
    pub primary_v4_address: Option<PrimaryAddress>,
    pub primary_v6_address: Option<PrimaryAddress>,
    pub security_group_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryAddress {
    pub address: String,
    pub one_to_one_nat: Option<OneToOneNat>,
}

/// Public IP attached to an interface via NAT.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OneToOneNat {
    pub address: String,
    pub ip_version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSettings {
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementPolicy {
    pub placement_group_id: String,
    pub host_affinity_rules: Vec<HostAffinityRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostAffinityRule {
    pub key: String,
    pub op: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulingPolicy {
    pub preemptible: bool,
}

/// A bootable disk image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub family: String,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub storage_size: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub min_disk_size: i64,
    pub product_ids: Vec<String>,
    pub status: String,
    pub os: Option<Os>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Os {
    pub r#type: String,
}

/// An availability zone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub id: String,
    pub region_id: String,
    pub status: String,
}

/// A disk type (network-hdd, network-ssd, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskType {
    pub id: String,
    pub description: String,
    pub zone_ids: Vec<String>,
}

/// A block storage disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disk {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub type_id: String,
    pub zone_id: String,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub size: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub block_size: i64,
    pub product_ids: Vec<String>,
    pub status: String,
    pub source_image_id: String,
    pub source_snapshot_id: String,
    pub instance_ids: Vec<String>,
    pub disk_placement_policy: Option<DiskPlacementPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskPlacementPolicy {
    pub placement_group_id: String,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub placement_group_partition: i64,
}

/// A disk snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub storage_size: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub disk_size: i64,
    pub product_ids: Vec<String>,
    pub status: String,
    pub source_disk_id: String,
}

// ---------------------------------------------------------------------------
// List envelopes
// ---------------------------------------------------------------------------

list_envelope!(ListInstancesResponse, instances, Instance);
list_envelope!(ListImagesResponse, images, Image);
list_envelope!(ListZonesResponse, zones, Zone);
list_envelope!(ListDiskTypesResponse, disk_types, DiskType);
list_envelope!(ListDisksResponse, disks, Disk);
list_envelope!(ListSnapshotsResponse, snapshots, Snapshot);

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

impl YcClient {
    pub async fn list_instances(&self, folder_id: &str) -> Result<Vec<Instance>> {
        self.get_all::<ListInstancesResponse>(
            COMPUTE_API_BASE,
            "/instances",
            Some(("folderId", folder_id)),
        )
        .await
    }

    pub async fn get_instance(&self, instance_id: &str) -> Result<Instance> {
        self.get_json(COMPUTE_API_BASE, &format!("/instances/{instance_id}"), &[])
            .await
    }

    pub async fn list_images(&self, folder_id: &str) -> Result<Vec<Image>> {
        self.get_all::<ListImagesResponse>(COMPUTE_API_BASE, "/images", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_image(&self, image_id: &str) -> Result<Image> {
        self.get_json(COMPUTE_API_BASE, &format!("/images/{image_id}"), &[])
            .await
    }

    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.get_all::<ListZonesResponse>(COMPUTE_API_BASE, "/zones", None)
            .await
    }

    pub async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        self.get_json(COMPUTE_API_BASE, &format!("/zones/{zone_id}"), &[])
            .await
    }

    pub async fn list_disk_types(&self) -> Result<Vec<DiskType>> {
        self.get_all::<ListDiskTypesResponse>(COMPUTE_API_BASE, "/diskTypes", None)
            .await
    }

    pub async fn get_disk_type(&self, disk_type_id: &str) -> Result<DiskType> {
        self.get_json(COMPUTE_API_BASE, &format!("/diskTypes/{disk_type_id}"), &[])
            .await
    }

    pub async fn list_disks(&self, folder_id: &str) -> Result<Vec<Disk>> {
        self.get_all::<ListDisksResponse>(COMPUTE_API_BASE, "/disks", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_disk(&self, disk_id: &str) -> Result<Disk> {
        self.get_json(COMPUTE_API_BASE, &format!("/disks/{disk_id}"), &[])
            .await
    }

    pub async fn list_snapshots(&self, folder_id: &str) -> Result<Vec<Snapshot>> {
        self.get_all::<ListSnapshotsResponse>(
            COMPUTE_API_BASE,
            "/snapshots",
            Some(("folderId", folder_id)),
        )
        .await
    }

    pub async fn get_snapshot(&self, snapshot_id: &str) -> Result<Snapshot> {
        self.get_json(COMPUTE_API_BASE, &format!("/snapshots/{snapshot_id}"), &[])
            .await
    }
}
