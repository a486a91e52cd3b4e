/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("weight for feature '{feature}' is not finite: {value}")]
    NonFiniteWeight { feature: String, value: f64 },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
