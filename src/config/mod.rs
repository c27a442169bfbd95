#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::builder::{DEFAULT_PORT, DEFAULT_SERVICES};
use crate::core::render::{AddressPrinter, OutputFormat, DEFAULT_SCHEME};
use crate::domain::ports::ServiceSource;
use toml_config::TomlConfig;

/// Effective configuration after defaults, config file and flags are merged.
///
/// Nothing is validated here: names and port are checked when the
/// `AddressBuilder` is created, the scheme when the printer writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub services: Vec<String>,
    pub port: u16,
    pub format: OutputFormat,
    pub scheme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
            port: DEFAULT_PORT,
            format: OutputFormat::default(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl Settings {
    /// Values present in the file replace the defaults; absent ones are kept.
    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();
        settings.merge_toml(config);
        settings
    }

    pub fn merge_toml(&mut self, config: &TomlConfig) {
        if let Some(services) = &config.queue.services {
            self.services = services.clone();
        }
        if let Some(port) = config.queue.port {
            self.port = port;
        }

        if let Some(output) = &config.output {
            if let Some(format) = output.format {
                self.format = format;
            }
            if let Some(scheme) = &output.scheme {
                self.scheme = scheme.clone();
            }
        }
    }

    pub fn printer(&self) -> AddressPrinter {
        AddressPrinter::new(self.format, self.scheme.clone())
    }
}

impl ServiceSource for Settings {
    fn service_names(&self) -> &[String] {
        &self.services
    }

    fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::AddressBuilder;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.services, vec!["queue1", "queue2"]);
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.format, OutputFormat::Plain);
        assert_eq!(settings.scheme, "http");
        assert!(AddressBuilder::from_source(&settings).is_ok());
    }

    #[test]
    fn test_invalid_settings_are_rejected_downstream() {
        let mut settings = Settings::default();
        settings.port = 0;
        assert!(AddressBuilder::from_source(&settings).is_err());

        let mut settings = Settings::default();
        settings.services.clear();
        assert!(AddressBuilder::from_source(&settings).is_err());

        let mut settings = Settings::default();
        settings.format = OutputFormat::Url;
        settings.scheme = "tcp".to_string();
        let addresses = AddressBuilder::from_source(&settings).unwrap().build();
        assert!(settings.printer().render(&addresses).is_err());
    }

    #[test]
    fn test_from_toml_keeps_output_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[queue]
services = ["q-a"]
port = 7000
"#,
        )
        .unwrap();

        let settings = Settings::from_toml(&config);
        assert_eq!(settings.services, vec!["q-a"]);
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.format, OutputFormat::Plain);
        assert_eq!(settings.scheme, "http");
    }

    #[test]
    fn test_from_toml_partial_queue_section() {
        let port_only = TomlConfig::from_toml_str("[queue]\nport = 9100\n").unwrap();
        let settings = Settings::from_toml(&port_only);
        assert_eq!(settings.services, vec!["queue1", "queue2"]);
        assert_eq!(settings.port, 9100);

        let services_only = TomlConfig::from_toml_str("[queue]\nservices = [\"broker\"]\n").unwrap();
        let settings = Settings::from_toml(&services_only);
        assert_eq!(settings.services, vec!["broker"]);
        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn test_from_toml_output_only() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        let settings = Settings::from_toml(&config);

        assert_eq!(settings.services, vec!["queue1", "queue2"]);
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
