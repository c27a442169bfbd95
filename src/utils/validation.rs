use crate::utils::error::{QueueAddrError, Result};

/// Longest name a DNS resolver would accept as a hostname.
pub const MAX_SERVICE_NAME_LEN: usize = 253;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> QueueAddrError {
    QueueAddrError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_service_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.len() > MAX_SERVICE_NAME_LEN {
        return Err(invalid(
            field_name,
            name,
            format!("Name is longer than {} characters", MAX_SERVICE_NAME_LEN),
        ));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(
            field_name,
            name,
            format!("Unsupported character {:?}", bad),
        ));
    }

    if name.starts_with('-') || name.starts_with('.') {
        return Err(invalid(
            field_name,
            name,
            "Name must start with a letter, digit or '_'",
        ));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    validate_positive_number(field_name, usize::from(port), 1)
}

pub fn validate_scheme(field_name: &str, scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(invalid(
            field_name,
            other,
            format!("Unsupported URL scheme: {}", other),
        )),
    }
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(QueueAddrError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
