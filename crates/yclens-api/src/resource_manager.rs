//! Resource-manager service: the cloud/folder hierarchy.

use crate::client::{RESOURCE_MANAGER_API_BASE, YcClient, list_envelope};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cloud {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub organization_id: String,
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    pub id: String,
    pub cloud_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub labels: HashMap<String, String>,
    pub status: String,
}

list_envelope!(ListCloudsResponse, clouds, Cloud);
list_envelope!(ListFoldersResponse, folders, Folder);

impl YcClient {
    /// List clouds visible to the token, optionally scoped to one
    /// organization.
    pub async fn list_clouds(&self, organization_id: Option<&str>) -> Result<Vec<Cloud>> {
        self.get_all::<ListCloudsResponse>(
            RESOURCE_MANAGER_API_BASE,
            "/clouds",
            organization_id.map(|id| ("organizationId", id)),
        )
        .await
    }

    pub async fn get_cloud(&self, cloud_id: &str) -> Result<Cloud> {
        self.get_json(RESOURCE_MANAGER_API_BASE, &format!("/clouds/{cloud_id}"), &[])
            .await
    }

    pub async fn list_folders(&self, cloud_id: &str) -> Result<Vec<Folder>> {
        self.get_all::<ListFoldersResponse>(
            RESOURCE_MANAGER_API_BASE,
            "/folders",
            Some(("cloudId", cloud_id)),
        )
        .await
    }

    pub async fn get_folder(&self, folder_id: &str) -> Result<Folder> {
        self.get_json(
            RESOURCE_MANAGER_API_BASE,
            &format!("/folders/{folder_id}"),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_cloud_and_folder() {
        let cloud: Cloud = serde_json::from_str(
            r#"{
                "id": "b1gcloud1def3ghi4jk5",
                "name": "production",
                "organizationId": "bpforg12def3ghi4jkl5",
                "createdAt": "2023-01-15T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(cloud.name, "production");
        assert_eq!(cloud.organization_id, "bpforg12def3ghi4jkl5");

        let folder: Folder = serde_json::from_str(
            r#"{
                "id": "b1gfolder1ef3ghi4jk5",
                "cloudId": "b1gcloud1def3ghi4jk5",
                "name": "default",
                "status": "ACTIVE"
            }"#,
        )
        .unwrap();
        assert_eq!(folder.cloud_id, "b1gcloud1def3ghi4jk5");
        assert_eq!(folder.status, "ACTIVE");
    }
}
