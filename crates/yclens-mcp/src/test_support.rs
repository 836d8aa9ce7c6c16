//! Shared stub upstream for module tests.

use async_trait::async_trait;
use yclens_api::compute::{Disk, DiskType, Image, Instance, Snapshot, Zone};
use yclens_api::resource_manager::{Cloud, Folder};
use yclens_api::vpc::{Address, Gateway, Network, RouteTable, SecurityGroup, Subnet};
use yclens_api::{ApiError, CloudInspect};

/// Fixed-data implementation of [`CloudInspect`]. Lists ignore the
/// scope argument (except folders, which filter by cloud); gets return
/// `NotFound` for unknown ids, like the live gateway does.
#[derive(Default)]
pub struct StubCloud {
    pub instances: Vec<Instance>,
    pub images: Vec<Image>,
    pub zones: Vec<Zone>,
    pub disk_types: Vec<DiskType>,
    pub disks: Vec<Disk>,
    pub snapshots: Vec<Snapshot>,
    pub networks: Vec<Network>,
    pub subnets: Vec<Subnet>,
    pub security_groups: Vec<SecurityGroup>,
    pub route_tables: Vec<RouteTable>,
    pub addresses: Vec<Address>,
    pub gateways: Vec<Gateway>,
    pub clouds: Vec<Cloud>,
    pub folders: Vec<Folder>,
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("resource {id} does not exist"))
}

fn find<T: Clone>(items: &[T], id: &str, item_id: impl Fn(&T) -> &str) -> Result<T, ApiError> {
    items
        .iter()
        .find(|item| item_id(item) == id)
        .cloned()
        .ok_or_else(|| not_found(id))
}

#[async_trait]
impl CloudInspect for StubCloud {
    async fn list_instances(&self, _folder_id: &str) -> Result<Vec<Instance>, ApiError> {
        Ok(self.instances.clone())
    }

    async fn get_instance(&self, instance_id: &str) -> Result<Instance, ApiError> {
        find(&self.instances, instance_id, |i| &i.id)
    }

    async fn list_images(&self, _folder_id: &str) -> Result<Vec<Image>, ApiError> {
        Ok(self.images.clone())
    }

    async fn get_image(&self, image_id: &str) -> Result<Image, ApiError> {
        find(&self.images, image_id, |i| &i.id)
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        Ok(self.zones.clone())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Zone, ApiError> {
        find(&self.zones, zone_id, |z| &z.id)
    }

    async fn list_disk_types(&self) -> Result<Vec<DiskType>, ApiError> {
        Ok(self.disk_types.clone())
    }

    async fn get_disk_type(&self, disk_type_id: &str) -> Result<DiskType, ApiError> {
        find(&self.disk_types, disk_type_id, |t| &t.id)
    }

    async fn list_disks(&self, _folder_id: &str) -> Result<Vec<Disk>, ApiError> {
        Ok(self.disks.clone())
    }

    async fn get_disk(&self, disk_id: &str) -> Result<Disk, ApiError> {
        find(&self.disks, disk_id, |d| &d.id)
    }

    async fn list_snapshots(&self, _folder_id: &str) -> Result<Vec<Snapshot>, ApiError> {
        Ok(self.snapshots.clone())
    }

    async fn get_snapshot(&self, snapshot_id: &str) -> Result<Snapshot, ApiError> {
        find(&self.snapshots, snapshot_id, |s| &s.id)
    }

    async fn list_networks(&self, _folder_id: &str) -> Result<Vec<Network>, ApiError> {
        Ok(self.networks.clone())
    }

    async fn get_network(&self, network_id: &str) -> Result<Network, ApiError> {
        find(&self.networks, network_id, |n| &n.id)
    }

    async fn list_subnets(&self, _folder_id: &str) -> Result<Vec<Subnet>, ApiError> {
        Ok(self.subnets.clone())
    }

    async fn get_subnet(&self, subnet_id: &str) -> Result<Subnet, ApiError> {
        find(&self.subnets, subnet_id, |s| &s.id)
    }

    async fn list_security_groups(&self, _folder_id: &str) -> Result<Vec<SecurityGroup>, ApiError> {
        Ok(self.security_groups.clone())
    }

    async fn get_security_group(&self, security_group_id: &str) -> Result<SecurityGroup, ApiError> {
        find(&self.security_groups, security_group_id, |g| &g.id)
    }

    async fn list_route_tables(&self, _folder_id: &str) -> Result<Vec<RouteTable>, ApiError> {
        Ok(self.route_tables.clone())
    }

    async fn get_route_table(&self, route_table_id: &str) -> Result<RouteTable, ApiError> {
        find(&self.route_tables, route_table_id, |t| &t.id)
    }

    async fn list_addresses(&self, _folder_id: &str) -> Result<Vec<Address>, ApiError> {
        Ok(self.addresses.clone())
    }

    async fn get_address(&self, address_id: &str) -> Result<Address, ApiError> {
        find(&self.addresses, address_id, |a| &a.id)
    }

    async fn list_gateways(&self, _folder_id: &str) -> Result<Vec<Gateway>, ApiError> {
        Ok(self.gateways.clone())
    }

    async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway, ApiError> {
        find(&self.gateways, gateway_id, |g| &g.id)
    }

    async fn list_clouds(&self, organization_id: Option<&str>) -> Result<Vec<Cloud>, ApiError> {
        Ok(self
            .clouds
            .iter()
            .filter(|c| organization_id.is_none_or(|org| c.organization_id == org))
            .cloned()
            .collect())
    }

    async fn get_cloud(&self, cloud_id: &str) -> Result<Cloud, ApiError> {
        find(&self.clouds, cloud_id, |c| &c.id)
    }

    async fn list_folders(&self, cloud_id: &str) -> Result<Vec<Folder>, ApiError> {
        Ok(self
            .folders
            .iter()
            .filter(|f| f.cloud_id == cloud_id)
            .cloned()
            .collect())
    }

    async fn get_folder(&self, folder_id: &str) -> Result<Folder, ApiError> {
        find(&self.folders, folder_id, |f| &f.id)
    }
}
