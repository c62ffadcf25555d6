//! Response payloads for the `/admin/usage/*` endpoints.
//!
//! The server owns these shapes; the client treats them as opaque and hands
//! them to views untouched, so each type flattens the whole body into a map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate usage figures for the whole deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageOverview {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Usage figures for a single user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUsageDetails {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Usage figures filtered by date range and/or feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageAnalytics {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
