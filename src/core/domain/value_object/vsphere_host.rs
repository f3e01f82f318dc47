use crate::core::domain::error::ValidationError;
use std::net::IpAddr;

/// A vCenter host address (DNS name or IP literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsphereHost(String);

impl VsphereHost {
    /// Creates a new host without validation.
    pub(crate) fn new_unchecked(host: String) -> Self {
        Self(host)
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the host in the form it takes inside a URL authority,
    /// bracketing IPv6 literals.
    pub(crate) fn as_authority(&self) -> String {
        match self.0.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => format!("[{}]", self.0),
            _ => self.0.clone(),
        }
    }
}

/// Checks that a host was given. Whether the name resolves or the address
/// is reachable is left to the URL parser and the transport.
pub(crate) fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }
    Ok(())
}
