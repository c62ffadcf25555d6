use crate::ClientResult;

use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use ua_config::ApiConfig;
use ua_core::{AnalyticsQuery, UsageAnalytics, UsageOverview, UserUsageDetails};

/// HTTP client for the usage-analytics endpoints.
///
/// Holds no mutable state between calls; one instance can be shared
/// process-wide and its operations awaited concurrently.
pub struct UsageClient {
    pub usage_base: String,
    client: ReqwestClient,
}

impl UsageClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `usage_base` - Base of the usage endpoints
    ///   (e.g., "http://localhost:8080/admin/usage")
    pub fn new(usage_base: &str) -> Self {
        Self {
            usage_base: usage_base.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from the api section of the loaded config.
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.usage_base())
    }

    /// Execute a GET and decode the body.
    ///
    /// Non-2xx statuses, network failures and decode failures all propagate
    /// as the transport's own error - no retries, no classification here.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let response = self.client.get(url).send().await?;
        let body = response.error_for_status()?.json::<T>().await?;
        Ok(body)
    }

    /// Fetch the deployment-wide usage overview.
    pub async fn get_usage_overview(&self) -> ClientResult<UsageOverview> {
        self.get(&format!("{}/overview", self.usage_base)).await
    }

    /// Fetch usage details for one user.
    ///
    /// The id is percent-encoded before insertion into the path.
    pub async fn get_user_usage_details(&self, user_id: &str) -> ClientResult<UserUsageDetails> {
        self.get(&self.user_details_url(user_id)).await
    }

    /// Fetch analytics filtered by the optional query fields.
    ///
    /// Absent fields are omitted from the query string entirely; an empty
    /// query issues the request with no `?` at all.
    pub async fn get_usage_analytics(&self, query: &AnalyticsQuery) -> ClientResult<UsageAnalytics> {
        self.get(&self.analytics_url(query)).await
    }

    pub(crate) fn user_details_url(&self, user_id: &str) -> String {
        format!("{}/user/{}", self.usage_base, urlencoding::encode(user_id))
    }

    pub(crate) fn analytics_url(&self, query: &AnalyticsQuery) -> String {
        let mut url = format!("{}/analytics", self.usage_base);

        let params: Vec<String> = query
            .to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        if !params.is_empty() {
            url.push_str(&format!("?{}", params.join("&")));
        }

        url
    }
}
