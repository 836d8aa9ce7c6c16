//! Session credential store with environment fallback.
//!
//! At most one (token, folder) pair is active per process. The slot is
//! owned by the server and handed to resolution points explicitly; the
//! lock keeps concurrent setup/clear/read calls coherent. Nothing is
//! persisted across restarts.

use crate::error::ToolError;
use std::sync::{Arc, RwLock};

/// Environment variable consulted when no session token is set.
pub const TOKEN_ENV: &str = "YC_TOKEN";
/// Environment variable consulted when no session folder id is set.
pub const FOLDER_ENV: &str = "YC_FOLDER_ID";

#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub iam_token: String,
    pub folder_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<SessionCredentials>>>,
}

/// Configured-ness of the two credential values. Never carries the
/// token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialStatus {
    pub token_configured: bool,
    pub folder_configured: bool,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated pair for the session.
    pub fn set(&self, iam_token: impl Into<String>, folder_id: impl Into<String>) {
        let mut slot = self.inner.write().expect("credential lock poisoned");
        *slot = Some(SessionCredentials {
            iam_token: iam_token.into(),
            folder_id: folder_id.into(),
        });
    }

    /// Discard the session pair. Environment fallback stays in effect.
    pub fn clear(&self) {
        let mut slot = self.inner.write().expect("credential lock poisoned");
        *slot = None;
    }

    /// IAM token: session value, else `YC_TOKEN`.
    pub fn token(&self) -> Option<String> {
        let session = {
            let slot = self.inner.read().expect("credential lock poisoned");
            slot.as_ref().map(|c| c.iam_token.clone())
        };
        session.or_else(|| non_empty_env(TOKEN_ENV))
    }

    /// Default folder id: session value, else `YC_FOLDER_ID`.
    pub fn default_folder_id(&self) -> Option<String> {
        let session = {
            let slot = self.inner.read().expect("credential lock poisoned");
            slot.as_ref().map(|c| c.folder_id.clone())
        };
        session.or_else(|| non_empty_env(FOLDER_ENV))
    }

    pub fn resolve_token(&self) -> Result<String, ToolError> {
        self.token().ok_or(ToolError::CredentialsMissing {
            what: "IAM token",
            env_var: TOKEN_ENV,
        })
    }

    /// An explicit argument wins over the configured default.
    pub fn resolve_folder(&self, explicit: Option<&str>) -> Result<String, ToolError> {
        if let Some(folder_id) = explicit {
            if !folder_id.trim().is_empty() {
                return Ok(folder_id.to_string());
            }
        }
        self.default_folder_id()
            .ok_or(ToolError::CredentialsMissing {
                what: "folder_id",
                env_var: FOLDER_ENV,
            })
    }

    pub fn status(&self) -> CredentialStatus {
        CredentialStatus {
            token_configured: self.token().is_some(),
            folder_configured: self.default_folder_id().is_some(),
        }
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

/// IAM tokens issued by the platform start with "t1." and are long.
pub fn validate_token(token: &str) -> bool {
    token.starts_with("t1.") && token.len() > 50
}

/// Folder/cloud-style ids are 20 chars of lowercase alphanumerics.
pub fn validate_scope_id(id: &str) -> bool {
    id.len() == 20
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "t1.9euelZqOjZCUyZWJk5uRnJeJlY2Nl-__TEST__abcdefghijkl";
    const FOLDER: &str = "b1gabc2def3ghi4jkl5m";

    #[test]
    fn resolve_fails_without_session_or_env() {
        temp_env::with_vars_unset([TOKEN_ENV, FOLDER_ENV], || {
            let store = CredentialStore::new();
            assert!(matches!(
                store.resolve_token(),
                Err(ToolError::CredentialsMissing {
                    what: "IAM token",
                    ..
                })
            ));
            assert!(matches!(
                store.resolve_folder(None),
                Err(ToolError::CredentialsMissing {
                    what: "folder_id",
                    ..
                })
            ));
        });
    }

    #[test]
    fn session_wins_then_clear_restores_env() {
        temp_env::with_vars(
            [(TOKEN_ENV, Some("t1.env-token")), (FOLDER_ENV, None)],
            || {
                let store = CredentialStore::new();
                store.set(TOKEN, FOLDER);
                assert_eq!(store.token().as_deref(), Some(TOKEN));
                assert_eq!(store.default_folder_id().as_deref(), Some(FOLDER));

                store.clear();
                assert_eq!(store.token().as_deref(), Some("t1.env-token"));
                assert_eq!(store.default_folder_id(), None);
            },
        );
    }

    #[test]
    fn status_reflects_setup_and_clear() {
        temp_env::with_vars_unset([TOKEN_ENV, FOLDER_ENV], || {
            let store = CredentialStore::new();
            let before = store.status();
            assert!(!before.token_configured);
            assert!(!before.folder_configured);

            store.set(TOKEN, FOLDER);
            let configured = store.status();
            assert!(configured.token_configured);
            assert!(configured.folder_configured);

            store.clear();
            assert!(!store.status().token_configured);
        });
    }

    #[test]
    fn explicit_folder_argument_wins() {
        temp_env::with_vars([(FOLDER_ENV, Some("b1genvdef3ghi4jkl5mn"))], || {
            let store = CredentialStore::new();
            assert_eq!(
                store.resolve_folder(Some(FOLDER)).unwrap(),
                FOLDER
            );
            // Blank argument falls through to the configured default.
            assert_eq!(
                store.resolve_folder(Some("  ")).unwrap(),
                "b1genvdef3ghi4jkl5mn"
            );
        });
    }

    #[test]
    fn token_format_validation() {
        assert!(validate_token(TOKEN));
        assert!(!validate_token("t1.short"));
        assert!(!validate_token(
            "v1.this-is-a-long-value-but-not-an-iam-token-prefix-at-all"
        ));
    }

    #[test]
    fn scope_id_format_validation() {
        assert!(validate_scope_id(FOLDER));
        assert!(!validate_scope_id("b1gabc"));
        assert!(!validate_scope_id("B1GABC2DEF3GHI4JKL5M"));
        assert!(!validate_scope_id("b1gabc2def3ghi4jkl5m9"));
    }
}
