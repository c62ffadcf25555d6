use serde::{Deserialize, Serialize};

/// Optional filter set for the usage analytics endpoint.
///
/// Absent fields are omitted from the outgoing request entirely, never sent
/// as empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub feature: Option<String>,
}

impl AnalyticsQuery {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.feature.is_none()
    }

    /// Key/value pairs for the present fields, in the wire order
    /// `start_date`, `end_date`, `feature`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![];
        if let Some(ref start) = self.start_date {
            pairs.push(("start_date", start.as_str()));
        }
        if let Some(ref end) = self.end_date {
            pairs.push(("end_date", end.as_str()));
        }
        if let Some(ref feature) = self.feature {
            pairs.push(("feature", feature.as_str()));
        }
        pairs
    }
}
