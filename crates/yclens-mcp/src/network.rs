//! VPC tools: networks, subnets, security groups, route tables,
//! addresses, gateways.

use crate::error::{Result, ToolError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use yclens_api::CloudInspect;
use yclens_api::vpc::{
    Address, Gateway, Network, RouteTable, SecurityGroup, SecurityGroupRule, Subnet,
};

#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub default_security_group_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Network> for NetworkSummary {
    fn from(network: Network) -> Self {
        Self {
            id: network.id,
            name: network.name,
            description: network.description,
            folder_id: network.folder_id,
            default_security_group_id: network.default_security_group_id,
            created_at: network.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubnetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub network_id: String,
    pub zone_id: String,
    pub v4_cidr_blocks: Vec<String>,
    pub v6_cidr_blocks: Vec<String>,
    pub route_table_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Subnet> for SubnetSummary {
    fn from(subnet: Subnet) -> Self {
        Self {
            id: subnet.id,
            name: subnet.name,
            description: subnet.description,
            folder_id: subnet.folder_id,
            network_id: subnet.network_id,
            zone_id: subnet.zone_id,
            v4_cidr_blocks: subnet.v4_cidr_blocks,
            v6_cidr_blocks: subnet.v6_cidr_blocks,
            route_table_id: if subnet.route_table_id.is_empty() {
                None
            } else {
                Some(subnet.route_table_id)
            },
            created_at: subnet.created_at,
        }
    }
}

/// One row of `list_vpc_security_groups`; rules are counted, not
/// expanded.
#[derive(Debug, Serialize)]
pub struct SecurityGroupSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub network_id: String,
    pub status: String,
    pub rules_count: usize,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<SecurityGroup> for SecurityGroupSummary {
    fn from(group: SecurityGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            folder_id: group.folder_id,
            network_id: group.network_id,
            status: group.status,
            rules_count: group.rules.len(),
            created_at: group.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SecurityGroupConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub network_id: String,
    pub status: String,
    pub rules: Vec<RuleSummary>,
    pub default_for_network: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub id: String,
    pub description: String,
    pub direction: String,
    pub protocol_name: String,
    pub protocol_number: i64,
    pub from_port: Option<i64>,
    pub to_port: Option<i64>,
    pub target: RuleTarget,
}

/// The peer a rule applies to. The API sets exactly one of these.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTarget {
    CidrBlocks {
        v4_cidr_blocks: Vec<String>,
        v6_cidr_blocks: Vec<String>,
    },
    SecurityGroupId(String),
    PredefinedTarget(String),
    Unspecified,
}

impl From<SecurityGroupRule> for RuleSummary {
    fn from(rule: SecurityGroupRule) -> Self {
        let target = if let Some(blocks) = rule.cidr_blocks {
            RuleTarget::CidrBlocks {
                v4_cidr_blocks: blocks.v4_cidr_blocks,
                v6_cidr_blocks: blocks.v6_cidr_blocks,
            }
        } else if let Some(group_id) = rule.security_group_id {
            RuleTarget::SecurityGroupId(group_id)
        } else if let Some(predefined) = rule.predefined_target {
            RuleTarget::PredefinedTarget(predefined)
        } else {
            RuleTarget::Unspecified
        };

        Self {
            id: rule.id,
            description: rule.description,
            direction: rule.direction,
            protocol_name: rule.protocol_name,
            protocol_number: rule.protocol_number,
            from_port: rule.ports.as_ref().map(|p| p.from_port),
            to_port: rule.ports.as_ref().map(|p| p.to_port),
            target,
        }
    }
}

impl From<SecurityGroup> for SecurityGroupConfig {
    fn from(group: SecurityGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            folder_id: group.folder_id,
            network_id: group.network_id,
            status: group.status,
            rules: group.rules.into_iter().map(RuleSummary::from).collect(),
            default_for_network: group.default_for_network,
            created_at: group.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteTableSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub network_id: String,
    pub static_routes: Vec<RouteSummary>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub destination_prefix: String,
    pub next_hop_address: Option<String>,
    pub gateway_id: Option<String>,
}

impl From<RouteTable> for RouteTableSummary {
    fn from(table: RouteTable) -> Self {
        Self {
            id: table.id,
            name: table.name,
            description: table.description,
            folder_id: table.folder_id,
            network_id: table.network_id,
            static_routes: table
                .static_routes
                .into_iter()
                .map(|route| RouteSummary {
                    destination_prefix: route.destination_prefix,
                    next_hop_address: route.next_hop_address,
                    gateway_id: route.gateway_id,
                })
                .collect(),
            created_at: table.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddressSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    pub address: Option<String>,
    pub zone_id: Option<String>,
    pub reserved: bool,
    pub used: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Address> for AddressSummary {
    fn from(address: Address) -> Self {
        let external = address.external_ipv4_address;
        Self {
            id: address.id,
            name: address.name,
            description: address.description,
            folder_id: address.folder_id,
            address: external.as_ref().map(|e| e.address.clone()),
            zone_id: external.map(|e| e.zone_id).filter(|z| !z.is_empty()),
            reserved: address.reserved,
            used: address.used,
            created_at: address.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GatewaySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub folder_id: String,
    /// True for shared egress gateways, the only kind served today.
    pub shared_egress: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Gateway> for GatewaySummary {
    fn from(gateway: Gateway) -> Self {
        Self {
            id: gateway.id,
            name: gateway.name,
            description: gateway.description,
            folder_id: gateway.folder_id,
            shared_egress: gateway.shared_egress_gateway.is_some(),
            created_at: gateway.created_at,
        }
    }
}

pub async fn list_networks(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<NetworkSummary>> {
    let networks = api
        .list_networks(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list networks in folder {folder_id}"), e))?;
    tracing::info!(count = networks.len(), folder_id, "listed networks");
    Ok(networks.into_iter().map(NetworkSummary::from).collect())
}

pub async fn get_network_details(
    api: &dyn CloudInspect,
    network_id: &str,
) -> Result<NetworkSummary> {
    let network = api
        .get_network(network_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve network {network_id}"), e))?;
    Ok(NetworkSummary::from(network))
}

pub async fn list_subnets(api: &dyn CloudInspect, folder_id: &str) -> Result<Vec<SubnetSummary>> {
    let subnets = api
        .list_subnets(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list subnets in folder {folder_id}"), e))?;
    Ok(subnets.into_iter().map(SubnetSummary::from).collect())
}

pub async fn get_subnet_details(
    api: &dyn CloudInspect,
    subnet_id: &str,
) -> Result<SubnetSummary> {
    let subnet = api
        .get_subnet(subnet_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve subnet {subnet_id}"), e))?;
    Ok(SubnetSummary::from(subnet))
}

pub async fn list_security_groups(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<SecurityGroupSummary>> {
    let groups = api.list_security_groups(folder_id).await.map_err(|e| {
        ToolError::upstream(format!("list security groups in folder {folder_id}"), e)
    })?;
    Ok(groups.into_iter().map(SecurityGroupSummary::from).collect())
}

pub async fn get_security_group_config(
    api: &dyn CloudInspect,
    security_group_id: &str,
) -> Result<SecurityGroupConfig> {
    let group = api.get_security_group(security_group_id).await.map_err(|e| {
        ToolError::upstream(format!("retrieve security group {security_group_id}"), e)
    })?;
    Ok(SecurityGroupConfig::from(group))
}

pub async fn list_route_tables(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<RouteTableSummary>> {
    let tables = api
        .list_route_tables(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list route tables in folder {folder_id}"), e))?;
    Ok(tables.into_iter().map(RouteTableSummary::from).collect())
}

pub async fn get_route_table_details(
    api: &dyn CloudInspect,
    route_table_id: &str,
) -> Result<RouteTableSummary> {
    let table = api
        .get_route_table(route_table_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve route table {route_table_id}"), e))?;
    Ok(RouteTableSummary::from(table))
}

pub async fn list_addresses(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<AddressSummary>> {
    let addresses = api
        .list_addresses(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list addresses in folder {folder_id}"), e))?;
    Ok(addresses.into_iter().map(AddressSummary::from).collect())
}

pub async fn get_address_details(
    api: &dyn CloudInspect,
    address_id: &str,
) -> Result<AddressSummary> {
    let address = api
        .get_address(address_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve address {address_id}"), e))?;
    Ok(AddressSummary::from(address))
}

pub async fn list_gateways(
    api: &dyn CloudInspect,
    folder_id: &str,
) -> Result<Vec<GatewaySummary>> {
    let gateways = api
        .list_gateways(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list gateways in folder {folder_id}"), e))?;
    Ok(gateways.into_iter().map(GatewaySummary::from).collect())
}

pub async fn get_gateway_details(
    api: &dyn CloudInspect,
    gateway_id: &str,
) -> Result<GatewaySummary> {
    let gateway = api
        .get_gateway(gateway_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve gateway {gateway_id}"), e))?;
    Ok(GatewaySummary::from(gateway))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubCloud;
    use yclens_api::vpc::{CidrBlocks, PortRange};

    fn rule_with_cidr() -> SecurityGroupRule {
        SecurityGroupRule {
            id: "enp1rule".to_string(),
            direction: "INGRESS".to_string(),
            protocol_name: "TCP".to_string(),
            protocol_number: 6,
            ports: Some(PortRange {
                from_port: 443,
                to_port: 443,
            }),
            cidr_blocks: Some(CidrBlocks {
                v4_cidr_blocks: vec!["0.0.0.0/0".to_string()],
                v6_cidr_blocks: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn group_summary_counts_rules() {
        let stub = StubCloud {
            security_groups: vec![SecurityGroup {
                id: "enpsg1".to_string(),
                name: "default".to_string(),
                rules: vec![rule_with_cidr(), SecurityGroupRule::default()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let groups =
            tokio_test::block_on(list_security_groups(&stub, "b1gabc2def3ghi4jkl5m")).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rules_count, 2);
    }

    #[test]
    fn group_config_expands_rule_targets() {
        let stub = StubCloud {
            security_groups: vec![SecurityGroup {
                id: "enpsg1".to_string(),
                rules: vec![
                    rule_with_cidr(),
                    SecurityGroupRule {
                        id: "enp2rule".to_string(),
                        direction: "EGRESS".to_string(),
                        security_group_id: Some("enppeer1def3ghi4jkl5".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        };

        let config = tokio_test::block_on(get_security_group_config(&stub, "enpsg1")).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert!(matches!(
            config.rules[0].target,
            RuleTarget::CidrBlocks { .. }
        ));
        assert_eq!(config.rules[0].from_port, Some(443));
        assert!(matches!(
            &config.rules[1].target,
            RuleTarget::SecurityGroupId(id) if id == "enppeer1def3ghi4jkl5"
        ));
    }

    #[test]
    fn subnet_summary_drops_empty_route_table() {
        let stub = StubCloud {
            subnets: vec![Subnet {
                id: "e9bsub1".to_string(),
                v4_cidr_blocks: vec!["10.128.0.0/24".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let subnets = tokio_test::block_on(list_subnets(&stub, "b1gabc2def3ghi4jkl5m")).unwrap();
        assert!(subnets[0].route_table_id.is_none());
        assert_eq!(subnets[0].v4_cidr_blocks, vec!["10.128.0.0/24".to_string()]);
    }
}
