//! MCP server wiring: parameter schemas, tool router, stdio transport.
//!
//! Tools return `Result<String, String>`; every failure is rendered as
//! a message and the server keeps serving.

use crate::compute;
use crate::credentials::{self, CredentialStatus, CredentialStore};
use crate::error::ToolError;
use crate::network;
use crate::resource_manager;
use crate::scope::{self, ScopeReport};
use crate::storage;
use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use yclens_api::YcClient;

// ============================================================================
// Parameter definitions
// ============================================================================

/// Credential setup parameters
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetupCredentialsParam {
    /// IAM token (format: t1.xxx..., obtained via `yc iam create-token`)
    pub iam_token: String,
    /// Default folder id (20-character lowercase alphanumeric)
    pub folder_id: String,
}

/// Optional folder scope
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FolderScopeParam {
    /// Folder id (falls back to the configured default when omitted)
    pub folder_id: Option<String>,
}

/// Optional organization scope
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrganizationScopeParam {
    /// Organization id (omit to list every cloud the token can reach)
    pub organization_id: Option<String>,
}

/// Optional cloud scope
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CloudScopeParam {
    /// Cloud id (omit to auto-select when only one cloud is visible)
    pub cloud_id: Option<String>,
}

/// Optional zone filter
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ZoneScopeParam {
    /// Zone id to filter by (for example ru-central1-a)
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InstanceIdParam {
    /// Virtual machine instance id
    pub instance_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageIdParam {
    /// Image id
    pub image_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ZoneIdParam {
    /// Availability zone id (for example ru-central1-a)
    pub zone_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiskTypeIdParam {
    /// Disk type id (for example network-ssd)
    pub disk_type_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiskIdParam {
    /// Disk id
    pub disk_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SnapshotIdParam {
    /// Snapshot id
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NetworkIdParam {
    /// VPC network id
    pub network_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubnetIdParam {
    /// Subnet id
    pub subnet_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SecurityGroupIdParam {
    /// Security group id
    pub security_group_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RouteTableIdParam {
    /// Route table id
    pub route_table_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressIdParam {
    /// Static address id
    pub address_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GatewayIdParam {
    /// Gateway id
    pub gateway_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CloudIdParam {
    /// Cloud id
    pub cloud_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FolderIdParam {
    /// Folder id
    pub folder_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResourceTypeParam {
    /// Resource type being queried (vms, networks, disks, folders, ...)
    pub resource_type: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn require_id(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(ToolError::InvalidArgument(format!("{what} must not be empty")).to_string());
    }
    Ok(())
}

fn render_status(status: &CredentialStatus) -> String {
    let mark = |configured: bool| {
        if configured {
            "✓ configured"
        } else {
            "✗ not configured"
        }
    };
    let mut out = String::from("Credentials status:\n");
    out.push_str(&format!("- IAM token: {}\n", mark(status.token_configured)));
    out.push_str(&format!("- Folder ID: {}\n", mark(status.folder_configured)));
    if !status.token_configured || !status.folder_configured {
        out.push_str("\nUse setup_credentials(iam_token, folder_id) to configure missing values.\n");
        out.push_str("To obtain them: `yc iam create-token` and `yc config get folder-id`.");
    }
    out
}

// ============================================================================
// MCP server
// ============================================================================

/// yclens MCP server: read-only Yandex Cloud inspection.
#[derive(Clone)]
pub struct YcLensServer {
    credentials: CredentialStore,
    tool_router: ToolRouter<Self>,
}

impl Default for YcLensServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl YcLensServer {
    pub fn new() -> Self {
        Self {
            credentials: CredentialStore::new(),
            tool_router: Self::tool_router(),
        }
    }

    /// A client carrying the resolved token. Built per call so a
    /// setup_credentials in between takes effect immediately.
    fn api(&self) -> Result<YcClient, String> {
        let token = self.credentials.resolve_token().map_err(|e| e.to_string())?;
        Ok(YcClient::new(token))
    }

    fn folder(&self, explicit: Option<&str>) -> Result<String, String> {
        self.credentials
            .resolve_folder(explicit)
            .map_err(|e| e.to_string())
    }

    // ------------------------------------------------------------------
    // Credentials
    // ------------------------------------------------------------------

    #[tool(
        description = "Configure Yandex Cloud credentials for this session: an IAM token and a default folder id. The token is kept in memory only and never persisted."
    )]
    async fn setup_credentials(
        &self,
        params: Parameters<SetupCredentialsParam>,
    ) -> Result<String, String> {
        let SetupCredentialsParam {
            iam_token,
            folder_id,
        } = params.0;

        if !credentials::validate_token(&iam_token) {
            return Err(ToolError::InvalidArgument(
                "invalid IAM token format: must start with \"t1.\" and be longer than 50 characters"
                    .to_string(),
            )
            .to_string());
        }
        if !credentials::validate_scope_id(&folder_id) {
            return Err(ToolError::InvalidArgument(
                "invalid folder id format: must be a 20-character lowercase alphanumeric string"
                    .to_string(),
            )
            .to_string());
        }

        self.credentials.set(iam_token, folder_id);
        info!("credentials configured for session");
        Ok("Credentials configured. Resource inspection tools are now available.".to_string())
    }

    #[tool(
        description = "Report whether an IAM token and default folder id are configured. Never echoes the token value."
    )]
    async fn get_credentials_status(&self) -> Result<String, String> {
        Ok(render_status(&self.credentials.status()))
    }

    #[tool(
        description = "Clear the session credentials. Environment-provided YC_TOKEN / YC_FOLDER_ID stay in effect."
    )]
    async fn clear_credentials(&self) -> Result<String, String> {
        self.credentials.clear();
        info!("credentials cleared");
        Ok("Credentials cleared from session.".to_string())
    }

    // ------------------------------------------------------------------
    // Compute
    // ------------------------------------------------------------------

    #[tool(
        description = "List virtual machines in a folder: id, name, status, zone, platform. Uses the configured default folder when folder_id is omitted."
    )]
    async fn list_virtual_machines(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let vms = compute::list_vms(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&vms)
    }

    #[tool(
        description = "Get the full configuration of a virtual machine: resources, disks, network interfaces (with public IPs), policies."
    )]
    async fn get_virtual_machine_config(
        &self,
        params: Parameters<InstanceIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.instance_id, "instance_id")?;
        let api = self.api()?;
        let config = compute::get_vm_config(&api, &params.0.instance_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&config)
    }

    #[tool(description = "List disk images in a folder.")]
    async fn list_compute_images(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let images = compute::list_images(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&images)
    }

    #[tool(description = "Get the configuration of a specific disk image.")]
    async fn get_image_configuration(
        &self,
        params: Parameters<ImageIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.image_id, "image_id")?;
        let api = self.api()?;
        let image = compute::get_image_details(&api, &params.0.image_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&image)
    }

    #[tool(description = "List all availability zones.")]
    async fn list_availability_zones(&self) -> Result<String, String> {
        let api = self.api()?;
        let zones = compute::list_zones(&api).await.map_err(|e| e.to_string())?;
        to_json(&zones)
    }

    #[tool(description = "Get details of a specific availability zone.")]
    async fn get_zone_configuration(
        &self,
        params: Parameters<ZoneIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.zone_id, "zone_id")?;
        let api = self.api()?;
        let zone = compute::get_zone_details(&api, &params.0.zone_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&zone)
    }

    #[tool(
        description = "List disk types, optionally only those available in a given zone."
    )]
    async fn list_compute_disk_types(
        &self,
        params: Parameters<ZoneScopeParam>,
    ) -> Result<String, String> {
        let api = self.api()?;
        let disk_types = compute::list_disk_types(&api, params.0.zone_id.as_deref())
            .await
            .map_err(|e| e.to_string())?;
        to_json(&disk_types)
    }

    #[tool(description = "Get details of a specific disk type.")]
    async fn get_disk_type_configuration(
        &self,
        params: Parameters<DiskTypeIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.disk_type_id, "disk_type_id")?;
        let api = self.api()?;
        let disk_type = compute::get_disk_type_details(&api, &params.0.disk_type_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&disk_type)
    }

    // ------------------------------------------------------------------
    // Storage
    // ------------------------------------------------------------------

    #[tool(
        description = "List storage disks in a folder: size, type, zone, status, attached instances."
    )]
    async fn list_storage_disks(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let disks = storage::list_disks(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&disks)
    }

    #[tool(description = "Get the full configuration of a specific disk.")]
    async fn get_disk_details(&self, params: Parameters<DiskIdParam>) -> Result<String, String> {
        require_id(&params.0.disk_id, "disk_id")?;
        let api = self.api()?;
        let disk = storage::get_disk_config(&api, &params.0.disk_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&disk)
    }

    #[tool(description = "List disk snapshots in a folder.")]
    async fn list_disk_snapshots(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let snapshots = storage::list_snapshots(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&snapshots)
    }

    #[tool(description = "Get the full configuration of a specific snapshot.")]
    async fn get_snapshot_details(
        &self,
        params: Parameters<SnapshotIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.snapshot_id, "snapshot_id")?;
        let api = self.api()?;
        let snapshot = storage::get_snapshot_config(&api, &params.0.snapshot_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&snapshot)
    }

    // ------------------------------------------------------------------
    // VPC
    // ------------------------------------------------------------------

    #[tool(description = "List VPC networks in a folder.")]
    async fn list_vpc_networks(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let networks = network::list_networks(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&networks)
    }

    #[tool(description = "Get the configuration of a specific VPC network.")]
    async fn get_network_configuration(
        &self,
        params: Parameters<NetworkIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.network_id, "network_id")?;
        let api = self.api()?;
        let net = network::get_network_details(&api, &params.0.network_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&net)
    }

    #[tool(description = "List VPC subnets in a folder, with their CIDR blocks.")]
    async fn list_vpc_subnets(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let subnets = network::list_subnets(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&subnets)
    }

    #[tool(description = "Get the configuration of a specific subnet.")]
    async fn get_subnet_configuration(
        &self,
        params: Parameters<SubnetIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.subnet_id, "subnet_id")?;
        let api = self.api()?;
        let subnet = network::get_subnet_details(&api, &params.0.subnet_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&subnet)
    }

    #[tool(description = "List security groups in a folder, with rule counts.")]
    async fn list_vpc_security_groups(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let groups = network::list_security_groups(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&groups)
    }

    #[tool(
        description = "Get a security group with its full rule set: directions, ports, protocols and targets."
    )]
    async fn get_security_group_details(
        &self,
        params: Parameters<SecurityGroupIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.security_group_id, "security_group_id")?;
        let api = self.api()?;
        let group = network::get_security_group_config(&api, &params.0.security_group_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&group)
    }

    #[tool(description = "List route tables in a folder, with their static routes.")]
    async fn list_vpc_route_tables(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let tables = network::list_route_tables(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&tables)
    }

    #[tool(description = "Get the configuration of a specific route table.")]
    async fn get_route_table_configuration(
        &self,
        params: Parameters<RouteTableIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.route_table_id, "route_table_id")?;
        let api = self.api()?;
        let table = network::get_route_table_details(&api, &params.0.route_table_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&table)
    }

    #[tool(description = "List reserved static IP addresses in a folder.")]
    async fn list_vpc_addresses(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let addresses = network::list_addresses(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&addresses)
    }

    #[tool(description = "Get the configuration of a specific static IP address.")]
    async fn get_address_configuration(
        &self,
        params: Parameters<AddressIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.address_id, "address_id")?;
        let api = self.api()?;
        let address = network::get_address_details(&api, &params.0.address_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&address)
    }

    #[tool(description = "List NAT gateways in a folder.")]
    async fn list_vpc_gateways(
        &self,
        params: Parameters<FolderScopeParam>,
    ) -> Result<String, String> {
        let folder_id = self.folder(params.0.folder_id.as_deref())?;
        let api = self.api()?;
        let gateways = network::list_gateways(&api, &folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&gateways)
    }

    #[tool(description = "Get the configuration of a specific gateway.")]
    async fn get_gateway_configuration(
        &self,
        params: Parameters<GatewayIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.gateway_id, "gateway_id")?;
        let api = self.api()?;
        let gateway = network::get_gateway_details(&api, &params.0.gateway_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&gateway)
    }

    // ------------------------------------------------------------------
    // Resource manager
    // ------------------------------------------------------------------

    #[tool(
        description = "List clouds visible to the token, optionally scoped to one organization."
    )]
    async fn list_yandex_clouds(
        &self,
        params: Parameters<OrganizationScopeParam>,
    ) -> Result<String, String> {
        let api = self.api()?;
        let clouds = resource_manager::list_clouds(&api, params.0.organization_id.as_deref())
            .await
            .map_err(|e| e.to_string())?;
        to_json(&clouds)
    }

    #[tool(description = "Get details of a specific cloud.")]
    async fn get_cloud_details_info(
        &self,
        params: Parameters<CloudIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.cloud_id, "cloud_id")?;
        let api = self.api()?;
        let cloud = resource_manager::get_cloud_details(&api, &params.0.cloud_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&cloud)
    }

    #[tool(
        description = "List folders in a cloud. With cloud_id omitted, a single visible cloud is auto-selected; several visible clouds come back as a choice list."
    )]
    async fn list_yandex_folders(
        &self,
        params: Parameters<CloudScopeParam>,
    ) -> Result<String, String> {
        let api = self.api()?;
        let listing = resource_manager::list_folders(&api, params.0.cloud_id.as_deref())
            .await
            .map_err(|e| e.to_string())?;
        to_json(&listing)
    }

    #[tool(description = "Get details of a specific folder.")]
    async fn get_folder_details_info(
        &self,
        params: Parameters<FolderIdParam>,
    ) -> Result<String, String> {
        require_id(&params.0.folder_id, "folder_id")?;
        let api = self.api()?;
        let folder = resource_manager::get_folder_details(&api, &params.0.folder_id)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&folder)
    }

    #[tool(
        description = "Walk the whole hierarchy visible to the token: clouds, their folders, and the organization id."
    )]
    async fn get_yandex_organization_context(&self) -> Result<String, String> {
        let api = self.api()?;
        let context = resource_manager::organization_context(&api)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&context)
    }

    #[tool(
        description = "Suggest which scope identifier (folder_id / cloud_id / organization_id) a resource query needs. Static mapping, nothing is fetched."
    )]
    async fn suggest_query_scope(
        &self,
        params: Parameters<ResourceTypeParam>,
    ) -> Result<String, String> {
        let resource_type = params.0.resource_type;
        let suggestion = scope::suggest_scope(&resource_type);
        to_json(&ScopeReport {
            resource_type,
            configured_folder_id: self.credentials.default_folder_id(),
            suggestion,
        })
    }
}

impl ServerHandler for YcLensServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "Read-only Yandex Cloud inspection. Configure credentials with \
             setup_credentials or the YC_TOKEN / YC_FOLDER_ID environment variables, \
             then use the list_*/get_* tools. Nothing here mutates cloud resources."
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }
}

/// Serve over stdio and wait for the host to hang up.
pub async fn run_server() -> Result<()> {
    let server = YcLensServer::new();
    let transport = (tokio::io::stdin(), tokio::io::stdout());

    let service = server.serve(transport).await.map_err(|e| {
        error!("MCP server initialization failed: {}", e);
        anyhow::anyhow!("MCP server initialization failed: {}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP server error: {}", e);
        anyhow::anyhow!("MCP server error: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_never_contains_the_token() {
        temp_env::with_vars(
            [(credentials::TOKEN_ENV, None::<&str>), (credentials::FOLDER_ENV, None)],
            || {
                let server = YcLensServer::new();
                let token = "t1.9euelZqOjZCUyZWJk5uRnJeJlY2Nl-__SECRET__abcdefgh";
                server
                    .credentials
                    .set(token, "b1gabc2def3ghi4jkl5m");

                let text = render_status(&server.credentials.status());
                assert!(text.contains("IAM token: ✓ configured"));
                assert!(text.contains("Folder ID: ✓ configured"));
                assert!(!text.contains(token));
                assert!(!text.contains("SECRET"));
            },
        );
    }

    #[test]
    fn status_text_points_at_setup_when_unconfigured() {
        temp_env::with_vars_unset([credentials::TOKEN_ENV, credentials::FOLDER_ENV], || {
            let server = YcLensServer::new();
            let text = render_status(&server.credentials.status());
            assert!(text.contains("✗ not configured"));
            assert!(text.contains("setup_credentials"));
        });
    }

    #[test]
    fn resource_tools_fail_cleanly_without_credentials() {
        temp_env::with_vars_unset([credentials::TOKEN_ENV, credentials::FOLDER_ENV], || {
            let server = YcLensServer::new();

            let err = tokio_test::block_on(
                server.list_virtual_machines(Parameters(FolderScopeParam { folder_id: None })),
            )
            .unwrap_err();
            assert!(err.contains("not configured"));

            let err = tokio_test::block_on(server.list_availability_zones()).unwrap_err();
            assert!(err.contains("IAM token is not configured"));
        });
    }

    #[test]
    fn blank_identifier_is_rejected_before_dispatch() {
        let err = require_id("   ", "instance_id").unwrap_err();
        assert!(err.contains("invalid argument"));
        assert!(err.contains("instance_id"));
    }
}
