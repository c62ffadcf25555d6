use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ua_config::ConfigError),

    #[error(transparent)]
    Client(#[from] ua_client::ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
