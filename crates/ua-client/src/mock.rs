//! Canned fixture payloads for mock mode.
//!
//! When `api.mock_enabled` is set the dashboard surface runs without a
//! backend; these fixtures stand in for the `/admin/usage/*` responses.

use serde_json::{Map, Value, json};
use ua_core::{AnalyticsQuery, UsageAnalytics, UsageOverview, UserUsageDetails};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("fixtures are JSON objects"),
    }
}

/// Fixture for the usage overview.
pub fn overview() -> UsageOverview {
    UsageOverview {
        fields: object(json!({
            "total_users": 128,
            "active_users_30d": 87,
            "total_requests": 41250,
            "top_features": ["export", "reports", "search"]
        })),
    }
}

/// Fixture for per-user usage details.
pub fn user_details(user_id: &str) -> UserUsageDetails {
    UserUsageDetails {
        fields: object(json!({
            "user_id": user_id,
            "requests_30d": 412,
            "last_seen": "2024-01-15T09:30:00Z",
            "features_used": ["export", "search"]
        })),
    }
}

/// Fixture for filtered analytics; echoes the filter back the way the
/// backend does.
pub fn analytics(query: &AnalyticsQuery) -> UsageAnalytics {
    let mut fields = object(json!({
        "buckets": [
            { "date": "2024-01-01", "requests": 1320 },
            { "date": "2024-01-02", "requests": 1486 }
        ],
        "total_requests": 2806
    }));

    let mut filter = Map::new();
    for (key, value) in query.to_query_pairs() {
        filter.insert(key.to_string(), Value::String(value.to_string()));
    }
    fields.insert("filter".to_string(), Value::Object(filter));

    UsageAnalytics { fields }
}
