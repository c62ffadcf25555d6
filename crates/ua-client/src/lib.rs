//! ua-client library
//!
//! Stateless HTTP client for the `/admin/usage/*` endpoints.

pub(crate) mod client;
pub(crate) mod error;
pub mod mock;


pub use client::UsageClient;
pub use error::{ClientError, Result as ClientResult};
