use crate::domain::model::Address;
use crate::utils::error::Result;
use crate::utils::validation::validate_scheme;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Prefix of every line printed in `plain` and `url` formats.
pub const ADDRESS_LABEL: &str = "Queue address: ";

pub const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Queue address: queue1:9000`
    #[default]
    Plain,
    /// `Queue address: http://queue1:9000/`
    Url,
    /// `["queue1:9000","queue2:9000"]`
    Json,
}

#[derive(Debug, Clone)]
pub struct AddressPrinter {
    format: OutputFormat,
    scheme: String,
}

impl Default for AddressPrinter {
    fn default() -> Self {
        Self::new(OutputFormat::Plain, DEFAULT_SCHEME)
    }
}

impl AddressPrinter {
    pub fn new(format: OutputFormat, scheme: impl Into<String>) -> Self {
        Self {
            format,
            scheme: scheme.into(),
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, addresses: &[Address]) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                for address in addresses {
                    writeln!(out, "{}{}", ADDRESS_LABEL, address)?;
                }
            }
            OutputFormat::Url => {
                validate_scheme("scheme", &self.scheme)?;
                for address in addresses {
                    writeln!(out, "{}{}", ADDRESS_LABEL, address.to_url(&self.scheme)?)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(addresses)?;
                writeln!(out, "{}", json)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    pub fn render(&self, addresses: &[Address]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, addresses)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
