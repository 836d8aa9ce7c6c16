//! Scope suggestion for resource queries.
//!
//! An LLM caller that hits a missing-argument error can ask which
//! identifier (folder_id / cloud_id / organization_id) a query needs.
//! The answer is a fixed mapping, nothing is fetched.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Folder,
    Cloud,
    Organization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeSuggestion {
    pub scope: Scope,
    pub identifier: &'static str,
    pub hint: &'static str,
}

/// What `suggest_query_scope` returns to the caller: the pure
/// suggestion plus the currently configured default folder.
#[derive(Debug, Serialize)]
pub struct ScopeReport {
    pub resource_type: String,
    pub configured_folder_id: Option<String>,
    pub suggestion: ScopeSuggestion,
}

/// Map a resource type onto the scope identifier its queries take.
/// Pure: equal input, equal output.
pub fn suggest_scope(resource_type: &str) -> ScopeSuggestion {
    match resource_type {
        "vms" | "virtual_machines" | "instances" | "disks" | "snapshots" | "images" => {
            ScopeSuggestion {
                scope: Scope::Folder,
                identifier: "folder_id",
                hint: "Compute resources are scoped to a folder; pass folder_id or configure a default.",
            }
        }
        "networks" | "subnets" | "security_groups" | "route_tables" | "addresses"
        | "gateways" => ScopeSuggestion {
            scope: Scope::Folder,
            identifier: "folder_id",
            hint: "Network resources live in a folder; list per folder and compare across folders of a cloud to see cross-folder connectivity.",
        },
        "zones" | "disk_types" => ScopeSuggestion {
            scope: Scope::Organization,
            identifier: "organization_id",
            hint: "Zones and disk types are platform-wide infrastructure; no folder or cloud id is needed.",
        },
        "folders" => ScopeSuggestion {
            scope: Scope::Cloud,
            identifier: "cloud_id",
            hint: "Folders are listed per cloud; pass cloud_id, or omit it to get the visible clouds.",
        },
        "clouds" | "organization" => ScopeSuggestion {
            scope: Scope::Organization,
            identifier: "organization_id",
            hint: "Clouds are listed per organization; omit organization_id to see every cloud the token can reach.",
        },
        _ => ScopeSuggestion {
            scope: Scope::Folder,
            identifier: "folder_id",
            hint: "Unknown resource type; folder scope is the default for most inspection queries.",
        },
    }
}
