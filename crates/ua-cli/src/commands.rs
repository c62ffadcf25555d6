use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch the deployment-wide usage overview
    Overview,

    /// Fetch usage details for one user
    User {
        /// User identifier (inserted into the request path, percent-encoded)
        user_id: String,
    },

    /// Fetch usage analytics, optionally filtered
    Analytics {
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Feature name to filter on
        #[arg(long)]
        feature: Option<String>,
    },
}
