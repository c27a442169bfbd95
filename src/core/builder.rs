use crate::domain::model::{Address, Port, ServiceName};
use crate::domain::ports::ServiceSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_list;
use std::collections::HashSet;

/// Queue services of the test environment, as named in its compose file.
pub const DEFAULT_SERVICES: [&str; 2] = ["queue1", "queue2"];

/// Port every queue listens on inside the test network.
pub const DEFAULT_PORT: u16 = 9000;

/// Maps an ordered list of service names and one port to `name:port` addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBuilder {
    services: Vec<ServiceName>,
    port: Port,
}

impl Default for AddressBuilder {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES
                .into_iter()
                .map(ServiceName::from_static)
                .collect(),
            port: Port::from_static(DEFAULT_PORT),
        }
    }
}

impl AddressBuilder {
    pub fn new(services: Vec<ServiceName>, port: Port) -> Self {
        Self { services, port }
    }

    /// Validates every name and the port from a configuration source.
    pub fn from_source<S: ServiceSource + ?Sized>(source: &S) -> Result<Self> {
        validate_non_empty_list("services", source.service_names())?;

        let services = source
            .service_names()
            .iter()
            .map(|name| ServiceName::new(name.as_str()))
            .collect::<Result<Vec<_>>>()?;
        let port = Port::new(source.port())?;

        let mut seen = HashSet::new();
        for name in &services {
            if !seen.insert(name) {
                tracing::warn!("Service {} is listed more than once", name);
            }
        }

        Ok(Self::new(services, port))
    }

    pub fn services(&self) -> &[ServiceName] {
        &self.services
    }

    pub fn port(&self) -> Port {
        self.port
    }

    /// One address per service, in input order.
    pub fn build(&self) -> Vec<Address> {
        let addresses: Vec<Address> = self
            .services
            .iter()
            .map(|name| Address::new(name.clone(), self.port))
            .collect();

        tracing::debug!(
            "Built {} addresses on port {}",
            addresses.len(),
            self.port
        );
        addresses
    }
}

/// Addresses of the default queue services, e.g. `["queue1:9000", "queue2:9000"]`.
pub fn build_addresses() -> Vec<String> {
    AddressBuilder::default()
        .build()
        .iter()
        .map(ToString::to_string)
        .collect()
}
