use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueAddrError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid address '{value}': {reason}")]
    InvalidAddressError { value: String, reason: String },
}

impl QueueAddrError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not write the address list: {}", e),
            Self::SerializationError(e) => format!("Could not encode the address list: {}", e),
            Self::UrlError(e) => format!("Could not build a URL for an address: {}", e),
            Self::TomlError { message } => format!("The config file is not valid TOML: {}", message),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            Self::MissingConfigError { field } => format!("'{}' must be set", field),
            Self::InvalidAddressError { value, reason } => {
                format!("'{}' is not a valid address: {}", value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that standard output is open and writable",
            Self::SerializationError(_) | Self::UrlError(_) => {
                "Check the service names and the configured scheme"
            }
            Self::TomlError { .. } => "Fix the syntax of the config file and run again",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Service names use letters, digits, '-', '_' or '.', and the port must be 1-65535"
            }
            Self::InvalidAddressError { .. } => "Addresses are written as <service>:<port>",
        }
    }

    /// Process exit code for the command-line binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueueAddrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = QueueAddrError::IoError(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.exit_code(), 2);

        let missing = QueueAddrError::MissingConfigError {
            field: "queue.port".to_string(),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(missing.user_friendly_message(), "'queue.port' must be set");
    }
}
