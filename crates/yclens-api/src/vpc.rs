//! VPC service: networks, subnets, security groups, route tables,
//! addresses, gateways.

use crate::client::{VPC_API_BASE, YcClient, list_envelope};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Network {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub default_security_group_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subnet {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub network_id: String,
    pub zone_id: String,
    pub v4_cidr_blocks: Vec<String>,
    pub v6_cidr_blocks: Vec<String>,
    pub route_table_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityGroup {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub network_id: String,
    pub status: String,
    pub rules: Vec<SecurityGroupRule>,
    pub default_for_network: bool,
}

/// A single ingress/egress rule. Exactly one of `cidr_blocks`,
/// `security_group_id`, `predefined_target` identifies the peer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityGroupRule {
    pub id: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub direction: String,
    pub ports: Option<PortRange>,
    pub protocol_name: String,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub protocol_number: i64,
    pub cidr_blocks: Option<CidrBlocks>,
    pub security_group_id: Option<String>,
    pub predefined_target: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortRange {
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub from_port: i64,
    #[serde(deserialize_with = "crate::de::i64_lenient")]
    pub to_port: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CidrBlocks {
    pub v4_cidr_blocks: Vec<String>,
    pub v6_cidr_blocks: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteTable {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub network_id: String,
    pub static_routes: Vec<StaticRoute>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticRoute {
    pub destination_prefix: String,
    pub next_hop_address: Option<String>,
    pub gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub external_ipv4_address: Option<ExternalIpv4Address>,
    pub reserved: bool,
    pub used: bool,
    pub r#type: String,
    pub ip_version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalIpv4Address {
    pub address: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gateway {
    pub id: String,
    pub folder_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub shared_egress_gateway: Option<SharedEgressGateway>,
}

/// Marker object; the only gateway kind the API currently serves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedEgressGateway {}

// ---------------------------------------------------------------------------
// List envelopes
// ---------------------------------------------------------------------------

list_envelope!(ListNetworksResponse, networks, Network);
list_envelope!(ListSubnetsResponse, subnets, Subnet);
list_envelope!(ListSecurityGroupsResponse, security_groups, SecurityGroup);
list_envelope!(ListRouteTablesResponse, route_tables, RouteTable);
list_envelope!(ListAddressesResponse, addresses, Address);
list_envelope!(ListGatewaysResponse, gateways, Gateway);

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

impl YcClient {
    pub async fn list_networks(&self, folder_id: &str) -> Result<Vec<Network>> {
        self.get_all::<ListNetworksResponse>(VPC_API_BASE, "/networks", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_network(&self, network_id: &str) -> Result<Network> {
        self.get_json(VPC_API_BASE, &format!("/networks/{network_id}"), &[])
            .await
    }

    pub async fn list_subnets(&self, folder_id: &str) -> Result<Vec<Subnet>> {
        self.get_all::<ListSubnetsResponse>(VPC_API_BASE, "/subnets", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_subnet(&self, subnet_id: &str) -> Result<Subnet> {
        self.get_json(VPC_API_BASE, &format!("/subnets/{subnet_id}"), &[])
            .await
    }

    pub async fn list_security_groups(&self, folder_id: &str) -> Result<Vec<SecurityGroup>> {
        self.get_all::<ListSecurityGroupsResponse>(
            VPC_API_BASE,
            "/securityGroups",
            Some(("folderId", folder_id)),
        )
        .await
    }

    pub async fn get_security_group(&self, security_group_id: &str) -> Result<SecurityGroup> {
        self.get_json(
            VPC_API_BASE,
            &format!("/securityGroups/{security_group_id}"),
            &[],
        )
        .await
    }

    pub async fn list_route_tables(&self, folder_id: &str) -> Result<Vec<RouteTable>> {
        self.get_all::<ListRouteTablesResponse>(
            VPC_API_BASE,
            "/routeTables",
            Some(("folderId", folder_id)),
        )
        .await
    }

    pub async fn get_route_table(&self, route_table_id: &str) -> Result<RouteTable> {
        self.get_json(VPC_API_BASE, &format!("/routeTables/{route_table_id}"), &[])
            .await
    }

    pub async fn list_addresses(&self, folder_id: &str) -> Result<Vec<Address>> {
        self.get_all::<ListAddressesResponse>(VPC_API_BASE, "/addresses", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_address(&self, address_id: &str) -> Result<Address> {
        self.get_json(VPC_API_BASE, &format!("/addresses/{address_id}"), &[])
            .await
    }

    pub async fn list_gateways(&self, folder_id: &str) -> Result<Vec<Gateway>> {
        self.get_all::<ListGatewaysResponse>(VPC_API_BASE, "/gateways", Some(("folderId", folder_id)))
            .await
    }

    pub async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway> {
        self.get_json(VPC_API_BASE, &format!("/gateways/{gateway_id}"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rule_with_cidr_target() {
        let payload = r#"{
            "id": "enp1rule",
            "direction": "INGRESS",
            "ports": {"fromPort": "443", "toPort": "443"},
            "protocolName": "TCP",
            "protocolNumber": "6",
            "cidrBlocks": {"v4CidrBlocks": ["0.0.0.0/0"]}
        }"#;
        let rule: SecurityGroupRule = serde_json::from_str(payload).unwrap();
        assert_eq!(rule.direction, "INGRESS");
        assert_eq!(rule.ports.as_ref().unwrap().from_port, 443);
        assert_eq!(
            rule.cidr_blocks.unwrap().v4_cidr_blocks,
            vec!["0.0.0.0/0".to_string()]
        );
        assert!(rule.security_group_id.is_none());
    }

    #[test]
    fn decodes_rule_with_group_target() {
        let payload = r#"{
            "id": "enp2rule",
            "direction": "EGRESS",
            "protocolName": "ANY",
            "protocolNumber": "-1",
            "securityGroupId": "enpsg123def3ghi4jkl5"
        }"#;
        let rule: SecurityGroupRule = serde_json::from_str(payload).unwrap();
        assert_eq!(rule.security_group_id.as_deref(), Some("enpsg123def3ghi4jkl5"));
        assert!(rule.cidr_blocks.is_none());
        assert!(rule.ports.is_none());
    }

    #[test]
    fn decodes_address_and_gateway() {
        let address: Address = serde_json::from_str(
            r#"{
                "id": "e9baddr1",
                "externalIpv4Address": {"address": "51.250.9.9", "zoneId": "ru-central1-b"},
                "reserved": true,
                "used": false
            }"#,
        )
        .unwrap();
        assert_eq!(
            address.external_ipv4_address.unwrap().address,
            "51.250.9.9"
        );
        assert!(address.reserved);

        let gateway: Gateway = serde_json::from_str(
            r#"{"id": "enpgw1", "name": "egress", "sharedEgressGateway": {}}"#,
        )
        .unwrap();
        assert!(gateway.shared_egress_gateway.is_some());
    }
}
