use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiometricError {
    #[error("{0} is missing or empty in scan event")]
    MissingField(String),

    #[error("Error parsing logdatetime: {reason} - logdatetime value: '{value}'")]
    TimestampParse { value: String, reason: String },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BiometricError {
    /// Name of the missing field, if this is a `MissingField` error
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            BiometricError::MissingField(field) => Some(field.as_str()),
            _ => None,
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for BiometricError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        BiometricError::Persistence(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for BiometricError {
    fn from(err: sqlx::Error) -> Self {
        BiometricError::Persistence(err.to_string())
    }
}

pub type BiometricResult<T> = Result<T, BiometricError>;
