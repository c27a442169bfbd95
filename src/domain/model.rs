use crate::utils::error::{QueueAddrError, Result};
use crate::utils::validation::{validate_port, validate_service_name};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Separator between the service name and the port in an [`Address`].
pub const ADDRESS_SEPARATOR: char = ':';

/// Identifier of a logical queue service, usable as a hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(Cow<'static, str>);

impl ServiceName {
    /// Wraps a compiled-in name without validating it.
    pub(crate) const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_service_name("service name", &name)?;
        Ok(Self(Cow::Owned(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceName {
    type Err = QueueAddrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A non-zero TCP port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    pub(crate) const fn from_static(port: u16) -> Self {
        Self(port)
    }

    pub fn new(port: u16) -> Result<Self> {
        validate_port("port", port)?;
        Ok(Self(port))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `name:port` pair. Derived from its inputs, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    service: ServiceName,
    port: Port,
}

impl Address {
    pub fn new(service: ServiceName, port: Port) -> Self {
        Self { service, port }
    }

    pub fn service(&self) -> &ServiceName {
        &self.service
    }

    pub fn port(&self) -> Port {
        self.port
    }

    /// Base URL a queue client would talk to, e.g. `http://queue1:9000/`.
    ///
    /// The name and port are kept verbatim; `Url` only checks that the result
    /// parses. The scheme is expected to be validated by the caller.
    pub fn to_url(&self, scheme: &str) -> Result<String> {
        let url = format!("{}://{}/", scheme, self);
        Url::parse(&url)?;
        Ok(url)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.service, ADDRESS_SEPARATOR, self.port)
    }
}

impl FromStr for Address {
    type Err = QueueAddrError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| QueueAddrError::InvalidAddressError {
            value: s.to_string(),
            reason,
        };

        if s.matches(ADDRESS_SEPARATOR).count() != 1 {
            return Err(invalid(format!(
                "expected exactly one '{}' separator",
                ADDRESS_SEPARATOR
            )));
        }

        let (name, port) = s
            .split_once(ADDRESS_SEPARATOR)
            .ok_or_else(|| invalid("missing separator".to_string()))?;

        let service = ServiceName::new(name).map_err(|e| invalid(e.to_string()))?;
        let port = port
            .parse::<u16>()
            .map_err(|e| invalid(format!("bad port: {}", e)))?;
        let port = Port::new(port).map_err(|e| invalid(e.to_string()))?;

        Ok(Self::new(service, port))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
