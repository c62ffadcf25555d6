mod analytics_query;
mod user_role;
mod user_session;
