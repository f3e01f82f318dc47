use crate::core::domain::{
    error::ValidationError,
    value_object::{VsphereHost, VspherePort},
};

/// Paths a client may address on a vCenter endpoint.
const ALLOWED_PATHS: [&str; 2] = ["/sdk", "/vsanHealth"];
const MAX_URL_LENGTH: usize = 2083;

/// The base URL of a vCenter endpoint, e.g. `https://vc.example.com:443/`.
///
/// Combines a [`VsphereHost`] and a [`VspherePort`] and hands out the SOAP
/// endpoint URLs below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsphereUrl(url::Url);

impl VsphereUrl {
    /// Builds and validates the base URL for the given host and port.
    pub fn new(
        host: &VsphereHost,
        port: &VspherePort,
        secure: bool,
    ) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let raw = format!("{}://{}:{}/", scheme, host.as_authority(), port.get());
        validate_url(&raw)?;
        let parsed = url::Url::parse(&raw)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(parsed))
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves one of the SOAP endpoint paths against the base URL.
    pub fn with_path(&self, path: &str) -> Result<String, ValidationError> {
        if !ALLOWED_PATHS.contains(&path) {
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid endpoint path. Must be one of: {}",
                ALLOWED_PATHS.join(", ")
            )));
        }
        self.0
            .join(path.trim_start_matches('/'))
            .map(String::from)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))
    }
}

/// Validates a base URL string.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !matches!(parsed.scheme(), "https" | "http") {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: https, http".to_string(),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL must contain a host".to_string(),
        });
    }
    Ok(())
}
