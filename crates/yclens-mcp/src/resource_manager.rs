//! Cloud/folder hierarchy tools.

use crate::error::{Result, ToolError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use yclens_api::CloudInspect;
use yclens_api::resource_manager::{Cloud, Folder};

#[derive(Debug, Clone, Serialize)]
pub struct CloudSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub organization_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Cloud> for CloudSummary {
    fn from(cloud: Cloud) -> Self {
        Self {
            id: cloud.id,
            name: cloud.name,
            description: cloud.description,
            organization_id: none_if_empty(cloud.organization_id),
            created_at: cloud.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FolderSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cloud_id: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Folder> for FolderSummary {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            description: folder.description,
            cloud_id: folder.cloud_id,
            status: folder.status,
            created_at: folder.created_at,
        }
    }
}

/// `list_yandex_folders` either lists folders or, when several clouds
/// are visible and none was named, asks the caller to pick one.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FolderListing {
    Folders(Vec<FolderSummary>),
    CloudChoiceNeeded(CloudChoice),
}

#[derive(Debug, Serialize)]
pub struct CloudChoice {
    pub error: &'static str,
    pub message: &'static str,
    pub available_clouds: Vec<CloudSummary>,
    pub suggestion: String,
}

/// The whole hierarchy visible to the token.
#[derive(Debug, Serialize)]
pub struct OrganizationContext {
    pub clouds: Vec<CloudContext>,
    pub total_folders: usize,
    pub organization_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CloudContext {
    pub id: String,
    pub name: String,
    pub organization_id: Option<String>,
    pub folders: Vec<FolderSummary>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

pub async fn list_clouds(
    api: &dyn CloudInspect,
    organization_id: Option<&str>,
) -> Result<Vec<CloudSummary>> {
    let clouds = api
        .list_clouds(organization_id)
        .await
        .map_err(|e| ToolError::upstream("list clouds", e))?;
    tracing::info!(count = clouds.len(), "listed clouds");
    Ok(clouds.into_iter().map(CloudSummary::from).collect())
}

pub async fn get_cloud_details(api: &dyn CloudInspect, cloud_id: &str) -> Result<CloudSummary> {
    let cloud = api
        .get_cloud(cloud_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve cloud {cloud_id}"), e))?;
    Ok(CloudSummary::from(cloud))
}

/// List folders in `cloud_id`. When no cloud is named: a single visible
/// cloud is auto-selected; several visible clouds come back as a choice
/// payload instead of guessing.
pub async fn list_folders(
    api: &dyn CloudInspect,
    cloud_id: Option<&str>,
) -> Result<FolderListing> {
    let cloud_id = match cloud_id {
        Some(id) => id.to_string(),
        None => {
            let clouds = list_clouds(api, None).await?;
            match clouds.len() {
                0 => {
                    return Err(ToolError::InvalidArgument(
                        "no clouds are visible to this token; check its permissions".to_string(),
                    ));
                }
                1 => {
                    tracing::info!(cloud_id = %clouds[0].id, "auto-selected the only visible cloud");
                    clouds[0].id.clone()
                }
                _ => {
                    let suggestion = format!(
                        "Use list_yandex_folders(cloud_id = \"{}\")",
                        clouds[0].id
                    );
                    return Ok(FolderListing::CloudChoiceNeeded(CloudChoice {
                        error: "cloud_id_required",
                        message: "Several clouds are visible; specify cloud_id.",
                        available_clouds: clouds,
                        suggestion,
                    }));
                }
            }
        }
    };

    let folders = api
        .list_folders(&cloud_id)
        .await
        .map_err(|e| ToolError::upstream(format!("list folders in cloud {cloud_id}"), e))?;
    Ok(FolderListing::Folders(
        folders.into_iter().map(FolderSummary::from).collect(),
    ))
}

pub async fn get_folder_details(api: &dyn CloudInspect, folder_id: &str) -> Result<FolderSummary> {
    let folder = api
        .get_folder(folder_id)
        .await
        .map_err(|e| ToolError::upstream(format!("retrieve folder {folder_id}"), e))?;
    Ok(FolderSummary::from(folder))
}

/// Walk clouds and their folders. A cloud whose folders cannot be read
/// is kept with an empty folder list rather than failing the whole
/// walk.
pub async fn organization_context(api: &dyn CloudInspect) -> Result<OrganizationContext> {
    let clouds = list_clouds(api, None).await?;

    let mut context = OrganizationContext {
        clouds: Vec::with_capacity(clouds.len()),
        total_folders: 0,
        organization_id: None,
    };

    for cloud in clouds {
        let folders = match api.list_folders(&cloud.id).await {
            Ok(folders) => folders.into_iter().map(FolderSummary::from).collect(),
            Err(e) => {
                tracing::warn!(cloud_id = %cloud.id, error = %e, "could not list folders");
                Vec::new()
            }
        };
        context.total_folders += folders.len();
        if context.organization_id.is_none() {
            context.organization_id = cloud.organization_id.clone();
        }
        context.clouds.push(CloudContext {
            id: cloud.id,
            name: cloud.name,
            organization_id: cloud.organization_id,
            folders,
        });
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubCloud;

    fn cloud(id: &str, name: &str, organization_id: &str) -> Cloud {
        Cloud {
            id: id.to_string(),
            name: name.to_string(),
            organization_id: organization_id.to_string(),
            ..Default::default()
        }
    }

    fn folder(id: &str, cloud_id: &str) -> Folder {
        Folder {
            id: id.to_string(),
            cloud_id: cloud_id.to_string(),
            status: "ACTIVE".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn single_cloud_is_auto_selected() {
        let stub = StubCloud {
            clouds: vec![cloud("b1gcloud1", "prod", "bpforg1")],
            folders: vec![folder("b1gf1", "b1gcloud1"), folder("b1gf2", "b1gcloud1")],
            ..Default::default()
        };

        match tokio_test::block_on(list_folders(&stub, None)).unwrap() {
            FolderListing::Folders(folders) => {
                assert_eq!(folders.len(), 2);
                assert_eq!(folders[0].cloud_id, "b1gcloud1");
            }
            FolderListing::CloudChoiceNeeded(_) => panic!("expected folders"),
        }
    }

    #[test]
    fn several_clouds_come_back_as_a_choice() {
        let stub = StubCloud {
            clouds: vec![
                cloud("b1gcloud1", "prod", "bpforg1"),
                cloud("b1gcloud2", "staging", "bpforg1"),
            ],
            ..Default::default()
        };

        match tokio_test::block_on(list_folders(&stub, None)).unwrap() {
            FolderListing::CloudChoiceNeeded(choice) => {
                assert_eq!(choice.error, "cloud_id_required");
                assert_eq!(choice.available_clouds.len(), 2);
                assert!(choice.suggestion.contains("b1gcloud1"));
            }
            FolderListing::Folders(_) => panic!("expected a choice payload"),
        }
    }

    #[test]
    fn organization_context_aggregates_folders() {
        let stub = StubCloud {
            clouds: vec![
                cloud("b1gcloud1", "prod", "bpforg1"),
                cloud("b1gcloud2", "staging", ""),
            ],
            folders: vec![
                folder("b1gf1", "b1gcloud1"),
                folder("b1gf2", "b1gcloud1"),
                folder("b1gf3", "b1gcloud2"),
            ],
            ..Default::default()
        };

        let context = tokio_test::block_on(organization_context(&stub)).unwrap();
        assert_eq!(context.clouds.len(), 2);
        assert_eq!(context.total_folders, 3);
        assert_eq!(context.organization_id.as_deref(), Some("bpforg1"));
        assert_eq!(context.clouds[0].folders.len(), 2);
        assert_eq!(context.clouds[1].folders.len(), 1);
    }
}
