pub mod analytics_query;
pub mod usage_payloads;
pub mod user_role;
pub mod user_session;
