//! Stubbable seam over the read endpoints.

use crate::YcClient;
use crate::compute::{Disk, DiskType, Image, Instance, Snapshot, Zone};
use crate::error::Result;
use crate::resource_manager::{Cloud, Folder};
use crate::vpc::{Address, Gateway, Network, RouteTable, SecurityGroup, Subnet};
use async_trait::async_trait;

/// Read-only view of the management API.
///
/// [`YcClient`] is the production implementation; tests substitute
/// fixed data behind the same trait.
#[async_trait]
pub trait CloudInspect: Send + Sync {
    async fn list_instances(&self, folder_id: &str) -> Result<Vec<Instance>>;
    async fn get_instance(&self, instance_id: &str) -> Result<Instance>;
    async fn list_images(&self, folder_id: &str) -> Result<Vec<Image>>;
    async fn get_image(&self, image_id: &str) -> Result<Image>;
    async fn list_zones(&self) -> Result<Vec<Zone>>;
    async fn get_zone(&self, zone_id: &str) -> Result<Zone>;
    async fn list_disk_types(&self) -> Result<Vec<DiskType>>;
    async fn get_disk_type(&self, disk_type_id: &str) -> Result<DiskType>;
    async fn list_disks(&self, folder_id: &str) -> Result<Vec<Disk>>;
    async fn get_disk(&self, disk_id: &str) -> Result<Disk>;
    async fn list_snapshots(&self, folder_id: &str) -> Result<Vec<Snapshot>>;
    async fn get_snapshot(&self, snapshot_id: &str) -> Result<Snapshot>;
    async fn list_networks(&self, folder_id: &str) -> Result<Vec<Network>>;
    async fn get_network(&self, network_id: &str) -> Result<Network>;
    async fn list_subnets(&self, folder_id: &str) -> Result<Vec<Subnet>>;
    async fn get_subnet(&self, subnet_id: &str) -> Result<Subnet>;
    async fn list_security_groups(&self, folder_id: &str) -> Result<Vec<SecurityGroup>>;
    async fn get_security_group(&self, security_group_id: &str) -> Result<SecurityGroup>;
    async fn list_route_tables(&self, folder_id: &str) -> Result<Vec<RouteTable>>;
    async fn get_route_table(&self, route_table_id: &str) -> Result<RouteTable>;
    async fn list_addresses(&self, folder_id: &str) -> Result<Vec<Address>>;
    async fn get_address(&self, address_id: &str) -> Result<Address>;
    async fn list_gateways(&self, folder_id: &str) -> Result<Vec<Gateway>>;
    async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway>;
    async fn list_clouds(&self, organization_id: Option<&str>) -> Result<Vec<Cloud>>;
    async fn get_cloud(&self, cloud_id: &str) -> Result<Cloud>;
    async fn list_folders(&self, cloud_id: &str) -> Result<Vec<Folder>>;
    async fn get_folder(&self, folder_id: &str) -> Result<Folder>;
}

#[async_trait]
impl CloudInspect for YcClient {
    async fn list_instances(&self, folder_id: &str) -> Result<Vec<Instance>> {
        YcClient::list_instances(self, folder_id).await
    }

    async fn get_instance(&self, instance_id: &str) -> Result<Instance> {
        YcClient::get_instance(self, instance_id).await
    }

    async fn list_images(&self, folder_id: &str) -> Result<Vec<Image>> {
        YcClient::list_images(self, folder_id).await
    }

    async fn get_image(&self, image_id: &str) -> Result<Image> {
        YcClient::get_image(self, image_id).await
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        YcClient::list_zones(self).await
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        YcClient::get_zone(self, zone_id).await
    }

    async fn list_disk_types(&self) -> Result<Vec<DiskType>> {
        YcClient::list_disk_types(self).await
    }

    async fn get_disk_type(&self, disk_type_id: &str) -> Result<DiskType> {
        YcClient::get_disk_type(self, disk_type_id).await
    }

    async fn list_disks(&self, folder_id: &str) -> Result<Vec<Disk>> {
        YcClient::list_disks(self, folder_id).await
    }

    async fn get_disk(&self, disk_id: &str) -> Result<Disk> {
        YcClient::get_disk(self, disk_id).await
    }

    async fn list_snapshots(&self, folder_id: &str) -> Result<Vec<Snapshot>> {
        YcClient::list_snapshots(self, folder_id).await
    }

    async fn get_snapshot(&self, snapshot_id: &str) -> Result<Snapshot> {
        YcClient::get_snapshot(self, snapshot_id).await
    }

    async fn list_networks(&self, folder_id: &str) -> Result<Vec<Network>> {
        YcClient::list_networks(self, folder_id).await
    }

    async fn get_network(&self, network_id: &str) -> Result<Network> {
        YcClient::get_network(self, network_id).await
    }

    async fn list_subnets(&self, folder_id: &str) -> Result<Vec<Subnet>> {
        YcClient::list_subnets(self, folder_id).await
    }

    async fn get_subnet(&self, subnet_id: &str) -> Result<Subnet> {
        YcClient::get_subnet(self, subnet_id).await
    }

    async fn list_security_groups(&self, folder_id: &str) -> Result<Vec<SecurityGroup>> {
        YcClient::list_security_groups(self, folder_id).await
    }

    async fn get_security_group(&self, security_group_id: &str) -> Result<SecurityGroup> {
        YcClient::get_security_group(self, security_group_id).await
    }

    async fn list_route_tables(&self, folder_id: &str) -> Result<Vec<RouteTable>> {
        YcClient::list_route_tables(self, folder_id).await
    }

    async fn get_route_table(&self, route_table_id: &str) -> Result<RouteTable> {
        YcClient::get_route_table(self, route_table_id).await
    }

    async fn list_addresses(&self, folder_id: &str) -> Result<Vec<Address>> {
        YcClient::list_addresses(self, folder_id).await
    }

    async fn get_address(&self, address_id: &str) -> Result<Address> {
        YcClient::get_address(self, address_id).await
    }

    async fn list_gateways(&self, folder_id: &str) -> Result<Vec<Gateway>> {
        YcClient::list_gateways(self, folder_id).await
    }

    async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway> {
        YcClient::get_gateway(self, gateway_id).await
    }

    async fn list_clouds(&self, organization_id: Option<&str>) -> Result<Vec<Cloud>> {
        YcClient::list_clouds(self, organization_id).await
    }

    async fn get_cloud(&self, cloud_id: &str) -> Result<Cloud> {
        YcClient::get_cloud(self, cloud_id).await
    }

    async fn list_folders(&self, cloud_id: &str) -> Result<Vec<Folder>> {
        YcClient::list_folders(self, cloud_id).await
    }

    async fn get_folder(&self, folder_id: &str) -> Result<Folder> {
        YcClient::get_folder(self, folder_id).await
    }
}
