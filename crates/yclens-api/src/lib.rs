//! Yandex Cloud management API client (read-only)
//!
//! Thin typed client for the REST projections of the compute, vpc and
//! resource-manager services: bearer-token auth, camelCase records,
//! page-token draining, and a uniform error taxonomy. Write endpoints
//! are deliberately absent.
//!
//! # Example
//!
//! ```ignore
//! use yclens_api::YcClient;
//!
//! let client = YcClient::new(iam_token);
//! let instances = client.list_instances("b1g...").await?;
//! ```

pub mod client;
pub mod compute;
mod de;
pub mod error;
pub mod inspect;
pub mod resource_manager;
pub mod vpc;

pub use client::YcClient;
pub use error::{ApiError, Result};
pub use inspect::CloudInspect;
