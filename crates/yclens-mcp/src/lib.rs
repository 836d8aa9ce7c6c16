//! yclens MCP server
//!
//! Read-only Yandex Cloud inspection exposed as MCP tools over stdio.
//! Credential resolution, tool dispatch and record normalization live
//! here; the HTTP client lives in `yclens-api`.

pub mod compute;
pub mod credentials;
pub mod error;
pub mod network;
pub mod resource_manager;
pub mod scope;
pub mod server;
pub mod storage;

pub use error::{Result, ToolError};
pub use server::{YcLensServer, run_server};

#[cfg(test)]
pub(crate) mod test_support;
