//! Tool-boundary error taxonomy.
//!
//! Everything a tool can fail with collapses into three classes, all of
//! which render as a plain message in the tool result. Nothing here is
//! fatal to the server.

use thiserror::Error;
use yclens_api::ApiError;

#[derive(Error, Debug)]
pub enum ToolError {
    /// Required credential absent from both the session and the
    /// environment.
    #[error("{what} is not configured. Run setup_credentials first or set the {env_var} environment variable.")]
    CredentialsMissing {
        what: &'static str,
        env_var: &'static str,
    },

    /// Required identifier missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The management API rejected or failed the call.
    #[error("Failed to {context}: {source}")]
    Upstream {
        context: String,
        #[source]
        source: ApiError,
    },
}

impl ToolError {
    pub fn upstream(context: impl Into<String>, source: ApiError) -> Self {
        Self::Upstream {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_carry_operation_and_id() {
        let err = ToolError::upstream(
            "retrieve virtual machine epd1abc",
            ApiError::NotFound("no such instance".to_string()),
        );
        let message = err.to_string();
        assert!(message.starts_with("Failed to retrieve virtual machine epd1abc"));
        assert!(message.contains("no such instance"));
    }

    #[test]
    fn credentials_missing_names_the_env_var() {
        let err = ToolError::CredentialsMissing {
            what: "IAM token",
            env_var: "YC_TOKEN",
        };
        let message = err.to_string();
        assert!(message.contains("IAM token"));
        assert!(message.contains("YC_TOKEN"));
    }
}
