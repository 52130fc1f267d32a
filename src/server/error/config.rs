use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be parsed.
    #[error("Environment variable '{name}' has invalid value '{value}'")]
    InvalidEnvVar { name: String, value: String },
}
