use super::toml_config::TomlConfig;
use super::Settings;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "queue-addresses")]
#[command(about = "Print the addresses of the queue services in the test environment")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma-separated service names, replacing the configured list
    #[arg(long, value_delimiter = ',')]
    pub services: Vec<String>,

    /// Port shared by every service
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// URL scheme used by the `url` format
    #[arg(long)]
    pub scheme: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from {}", path.display());
            settings.merge_toml(&TomlConfig::from_file(path)?);
        }

        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if !self.services.is_empty() {
            tracing::debug!("Services overridden to: {}", self.services.join(","));
            settings.services = self.services.clone();
        }

        if let Some(port) = self.port {
            tracing::debug!("Port overridden to: {}", port);
            settings.port = port;
        }

        if let Some(format) = self.format {
            settings.format = format;
        }

        if let Some(scheme) = &self.scheme {
            settings.scheme = scheme.clone();
        }
    }
}
