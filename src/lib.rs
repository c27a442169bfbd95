pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, Settings};

pub use crate::core::builder::{build_addresses, AddressBuilder};
pub use crate::core::render::{AddressPrinter, OutputFormat, ADDRESS_LABEL};
pub use domain::model::{Address, Port, ServiceName};
pub use utils::error::{QueueAddrError, Result};
