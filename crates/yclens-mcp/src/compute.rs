//! Virtual machine, image, zone and disk-type tools.
//!
//! Each function resolves to a single read call against the management
//! API and projects the record into a summary the caller can digest.

use crate::error::{Result, ToolError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use yclens_api::CloudInspect;
use yclens_api::compute::{DiskType, Image, Instance, Zone};

/// One row of `list_virtual_machines`.
#[derive(Debug, Serialize)]
pub struct VmSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub zone_id: String,
    pub platform_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Instance> for VmSummary {
    fn from(instance: Instance) -> Self {
        Self {
            id: instance.id,
            name: instance.name,
            description: instance.description,
            status: instance.status,
            zone_id: instance.zone_id,
            platform_id: instance.platform_id,
            created_at: instance.created_at,
        }
    }
}

/// Full configuration of one instance.
#[derive(Debug, Serialize)]
pub struct VmConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub zone_id: String,
    pub platform_id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub fqdn: String,
    pub resources: ResourcesSummary,
    pub metadata: HashMap<String, String>,
    pub network_interfaces: Vec<InterfaceSummary>,
    pub boot_disk: Option<AttachmentSummary>,
    pub secondary_disks: Vec<AttachmentSummary>,
    pub service_account_id: String,
    pub network_type: String,
    pub placement_group_id: Option<String>,
    pub preemptible: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct ResourcesSummary {
    pub cores: i64,
    pub memory: i64,
    pub core_fraction: i64,
    pub gpus: i64,
}

#[derive(Debug, Serialize)]
pub struct InterfaceSummary {
    pub index: String,
    pub mac_address: String,
    pub subnet_id: String,
    pub primary_v4_address: Option<String>,
    pub primary_v6_address: Option<String>,
    /// Present when a one-to-one NAT exposes the interface publicly.
    pub public_ip: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentSummary {
    pub disk_id: String,
    pub auto_delete: bool,
    pub device_name: String,
}

impl From<Instance> for VmConfig {
    fn from(instance: Instance) -> Self {
        let resources = instance
            .resources
            .map(|r| ResourcesSummary {
                cores: r.cores,
                memory: r.memory,
                core_fraction: r.core_fraction,
                gpus: r.gpus,
            })
            .unwrap_or_default();

        let network_interfaces = instance
            .network_interfaces
            .into_iter()
            .map(|ni| InterfaceSummary {
                index: ni.index,
                mac_address: ni.mac_address,
                subnet_id: ni.subnet_id,
                public_ip: ni
                    .primary_v4_address
                    .as_ref()
                    .and_then(|a| a.one_to_one_nat.as_ref())
                    .map(|nat| nat.address.clone()),
                primary_v4_address: ni.primary_v4_address.map(|a| a.address),
                primary_v6_address: ni.primary_v6_address.map(|a| a.address),
            })
            .collect();

        let attachment = |disk: yclens_api::compute::AttachedDisk| AttachmentSummary {
            disk_id: disk.disk_id,
            auto_delete: disk.auto_delete,
            device_name: disk.device_name,
        };

        Self {
            id: instance.id,
            name: instance.name,
            description: instance.description,
            status: instance.status,
            zone_id: instance.zone_id,
            platform_id: instance.platform_id,
            folder_id: instance.folder_id,
            created_at: instance.created_at,
            fqdn: instance.fqdn,
            resources,
            metadata: instance.metadata,
            network_interfaces,
            boot_disk: instance.boot_disk.map(attachment),
            secondary_disks: instance.secondary_disks.into_iter().map(attachment).collect(),
            service_account_id: instance.service_account_id,
            network_type: instance
                .network_settings
                .map(|s| s.r#type)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "STANDARD".to_string()),
            placement_group_id: instance
                .placement_policy
                .map(|p| p.placement_group_id)
                .filter(|id| !id.is_empty()),
            preemptible: instance
                .scheduling_policy
                .map(|p| p.preemptible)
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub family: String,
    pub folder_id: String,
    pub storage_size: i64,
    pub min_disk_size: i64,
    pub os_type: Option<String>,
    pub product_ids: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Image> for ImageSummary {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            name: image.name,
            description: image.description,
            status: image.status,
            family: image.family,
            folder_id: image.folder_id,
            storage_size: image.storage_size,
            min_disk_size: image.min_disk_size,
            os_type: image.os.map(|os| os.r#type),
            product_ids: image.product_ids,
            created_at: image.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ZoneSummary {
    pub id: String,
    pub region_id: String,
    pub status: String,
}

impl From<Zone> for ZoneSummary {
    fn from(zone: Zone) -> Self {
        Self {
            id: zone.id,
            region_id: zone.region_id,
            status: zone.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiskTypeSummary {
    pub id: String,
    pub description: String,
    pub zone_ids: Vec<String>,
}

impl From<DiskType> for DiskTypeSummary {
    fn from(disk_type: DiskType) -> Self {
        Self {
            id: disk_type.id,
            description: disk_type.description,
            zone_ids: disk_type.zone_ids,
        }
    }
}

pub async fn list_vms(api: &dyn CloudInspect, folder_id: &str) -> Result<Vec<VmSummary>> {
    let instances = api.list_instances(folder_id).await.map_err(|e| {
        ToolError::upstream(format!("list virtual machines in folder {folder_id}"), e)
    })?;
    tracing::info!(count = instances.len(), folder_id, "listed virtual machines");
    Ok(instances.into_iter().map(VmSummary::from).collect())
}

pub async fn get_vm_config(api: &dyn CloudInspect, instance_id: &str) -> Result<VmConfig> {
    let instance = api
        .get_instance(instance_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve virtual machine {instance_id}"), e))?;
    Ok(VmConfig::from(instance))
}

pub async fn list_images(api: &dyn CloudInspect, folder_id: &str) -> Result<Vec<ImageSummary>> {
    let images = api
        .list_images(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list images in folder {folder_id}"), e))?;
    Ok(images.into_iter().map(ImageSummary::from).collect())
}

pub async fn get_image_details(api: &dyn CloudInspect, image_id: &str) -> Result<ImageSummary> {
    let image = api
        .get_image(image_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve image {image_id}"), e))?;
    Ok(ImageSummary::from(image))
}

pub async fn list_zones(api: &dyn CloudInspect) -> Result<Vec<ZoneSummary>> {
    let zones = api
        .list_zones()
        .await
        .map_err(|e| ToolError::upstream("list availability zones", e))?;
    Ok(zones.into_iter().map(ZoneSummary::from).collect())
}

pub async fn get_zone_details(api: &dyn CloudInspect, zone_id: &str) -> Result<ZoneSummary> {
    let zone = api
        .get_zone(zone_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve zone {zone_id}"), e))?;
    Ok(ZoneSummary::from(zone))
}

/// The list endpoint is not zone-scoped; the zone filter is applied
/// here against each type's advertised zones.
pub async fn list_disk_types(
    api: &dyn CloudInspect,
    zone_id: Option<&str>,
) -> Result<Vec<DiskTypeSummary>> {
    let mut disk_types = api
        .list_disk_types()
        .await
        .map_err(|e| ToolError::upstream("list disk types", e))?;
    if let Some(zone_id) = zone_id {
        disk_types.retain(|t| t.zone_ids.iter().any(|z| z == zone_id));
    }
    Ok(disk_types.into_iter().map(DiskTypeSummary::from).collect())
}

pub async fn get_disk_type_details(
    api: &dyn CloudInspect,
    disk_type_id: &str,
) -> Result<DiskTypeSummary> {
    let disk_type = api
        .get_disk_type(disk_type_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve disk type {disk_type_id}"), e))?;
    Ok(DiskTypeSummary::from(disk_type))
}
