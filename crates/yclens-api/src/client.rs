//! Shared HTTP plumbing for the management REST gateway.
//!
//! Every service speaks the same dialect: bearer-token auth, camelCase
//! JSON, `google.rpc.Status` error bodies, and `nextPageToken`
//! pagination on list endpoints.

use crate::error::{ApiError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub(crate) const COMPUTE_API_BASE: &str = "https://compute.api.cloud.yandex.net/compute/v1";
pub(crate) const VPC_API_BASE: &str = "https://vpc.api.cloud.yandex.net/vpc/v1";
pub(crate) const RESOURCE_MANAGER_API_BASE: &str =
    "https://resource-manager.api.cloud.yandex.net/resource-manager/v1";

/// Requested page size for list calls. The gateway caps pages at 1000.
const PAGE_SIZE: &str = "1000";

/// Read-only client for the Yandex Cloud management API.
///
/// Holds the IAM token for the session; every method issues a `GET`
/// against one of the service gateways.
#[derive(Clone)]
pub struct YcClient {
    client: reqwest::Client,
    iam_token: String,
}

impl YcClient {
    pub fn new(iam_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            iam_token: iam_token.into(),
        }
    }

    /// Issue a GET and decode the JSON body, mapping failures onto
    /// [`ApiError`].
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", base, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.iam_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), &body));
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch every page of a list endpoint. `scope` is the optional
    /// scoping query parameter (`folderId`, `cloudId`, ...).
    pub(crate) async fn get_all<P: ListPage>(
        &self,
        base: &str,
        path: &str,
        scope: Option<(&str, &str)>,
    ) -> Result<Vec<P::Item>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query: Vec<(&str, &str)> = vec![("pageSize", PAGE_SIZE)];
            if let Some((key, value)) = scope {
                query.push((key, value));
            }
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }
            let page = self.get_json::<P>(base, path, &query).await?;
            let (batch, next) = page.into_parts();
            items.extend(batch);
            match next {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(items)
    }
}

/// A decoded page of a list endpoint.
pub(crate) trait ListPage: DeserializeOwned {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

/// Declare a list-endpoint envelope and its [`ListPage`] impl.
macro_rules! list_envelope {
    ($name:ident, $field:ident, $item:ty) => {
        #[derive(Debug, Default, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub(crate) struct $name {
            $field: Vec<$item>,
            next_page_token: Option<String>,
        }

        impl crate::client::ListPage for $name {
            type Item = $item;

            fn into_parts(self) -> (Vec<$item>, Option<String>) {
                (self.$field, self.next_page_token)
            }
        }
    };
}

pub(crate) use list_envelope;

/// Error body of the gateway (`google.rpc.Status` projection).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Map a non-success response onto the error taxonomy.
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 | 403 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited(message),
        _ => ApiError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_auth_statuses() {
        let body = r#"{"code": 16, "message": "The token has expired"}"#;
        match error_from_response(401, body) {
            ApiError::Unauthorized(message) => assert_eq!(message, "The token has expired"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            error_from_response(403, body),
            ApiError::Unauthorized(_)
        ));
    }

    #[test]
    fn maps_not_found_with_message() {
        let body = r#"{"code": 5, "message": "Instance epdmissing not found"}"#;
        match error_from_response(404, body) {
            ApiError::NotFound(message) => {
                assert!(message.contains("epdmissing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn maps_rate_limit() {
        assert!(matches!(
            error_from_response(429, r#"{"message": "quota exceeded"}"#),
            ApiError::RateLimited(_)
        ));
    }

    #[test]
    fn falls_back_to_raw_body_when_not_json() {
        match error_from_response(502, "upstream connect error") {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream connect error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
