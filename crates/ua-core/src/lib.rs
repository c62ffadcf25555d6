pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::analytics_query::AnalyticsQuery;
pub use models::usage_payloads::{UsageAnalytics, UsageOverview, UserUsageDetails};
pub use models::user_role::UserRole;
pub use models::user_session::UserSession;
