use crate::core::render::OutputFormat;
use crate::utils::error::{QueueAddrError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every field is optional; whatever is absent falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub queue: QueueConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    pub services: Option<Vec<String>>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub scheme: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QueueAddrError::TomlError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QueueAddrError::TomlError {
            message: format!("env substitution: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Checks the values the file sets, reporting errors with their TOML keys.
    pub fn validate_config(&self) -> Result<()> {
        if let Some(services) = &self.queue.services {
            validation::validate_non_empty_list("queue.services", services)?;
            for name in services {
                validation::validate_service_name("queue.services", name)?;
            }
        }

        if let Some(port) = self.queue.port {
            validation::validate_port("queue.port", port)?;
        }

        if let Some(scheme) = self.output.as_ref().and_then(|o| o.scheme.as_deref()) {
            validation::validate_scheme("output.scheme", scheme)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[queue]
services = ["queue1", "queue2", "queue3"]
port = 9100

[output]
format = "url"
scheme = "https"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.queue.services,
            Some(vec!["queue1".to_string(), "queue2".to_string(), "queue3".to_string()])
        );
        assert_eq!(config.queue.port, Some(9100));
        let output = config.output.as_ref().unwrap();
        assert_eq!(output.format, Some(OutputFormat::Url));
        assert_eq!(output.scheme.as_deref(), Some("https"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUEUE_ADDRESSES_TEST_PORT", "9500");

        let toml_content = r#"
[queue]
services = ["queue1"]
port = ${QUEUE_ADDRESSES_TEST_PORT}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.queue.port, Some(9500));

        std::env::remove_var("QUEUE_ADDRESSES_TEST_PORT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[queue]
services = ["${QUEUE_ADDRESSES_TEST_UNSET}"]
port = 9000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.queue.services,
            Some(vec!["${QUEUE_ADDRESSES_TEST_UNSET}".to_string()])
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_port = TomlConfig::from_toml_str("[queue]\nservices = [\"queue1\"]\nport = 0\n").unwrap();
        assert!(bad_port.validate().is_err());

        let no_services = TomlConfig::from_toml_str("[queue]\nservices = []\nport = 9000\n").unwrap();
        assert!(matches!(
            no_services.validate(),
            Err(QueueAddrError::MissingConfigError { .. })
        ));

        let bad_name = TomlConfig::from_toml_str("[queue]\nservices = [\"queue:1\"]\nport = 9000\n").unwrap();
        assert!(bad_name.validate().is_err());
    }

    #[test]
    fn test_partial_config_is_accepted() {
        let port_only = TomlConfig::from_toml_str("[queue]\nport = 9100\n").unwrap();
        assert_eq!(port_only.queue.services, None);
        assert_eq!(port_only.queue.port, Some(9100));
        assert!(port_only.validate().is_ok());

        let output_only = TomlConfig::from_toml_str("[output]\nscheme = \"https\"\n").unwrap();
        assert_eq!(output_only.queue.services, None);
        assert_eq!(output_only.queue.port, None);
        assert!(output_only.validate().is_ok());

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert!(empty.output.is_none());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[queue\nport = 9000").unwrap_err();
        assert!(matches!(err, QueueAddrError::TomlError { .. }));

        let err = TomlConfig::from_toml_str("[queue]\nservices = [\"queue1\"]\nport = 70000\n").unwrap_err();
        assert!(matches!(err, QueueAddrError::TomlError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[queue]\nservices = [\"alpha\", \"beta\"]\nport = 9000\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.queue.services,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
        assert_eq!(config.queue.port, Some(9000));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/queue-addresses.toml").unwrap_err();
        assert!(matches!(err, QueueAddrError::IoError(_)));
    }
}
