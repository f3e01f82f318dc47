use crate::core::domain::error::ValidationError;
use std::fmt;

/// Name of the cookie vCenter issues on a successful `Login`.
pub const SESSION_COOKIE_NAME: &str = "vmware_soap_session";

/// The session cookie that authenticates every call after `Login`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    value: String,
}

impl SessionCookie {
    /// Creates a new cookie without validation.
    pub(crate) fn new_unchecked(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// Extracts the `name=value` pair from a `Set-Cookie` header value,
    /// dropping attributes such as `Path` and `HttpOnly`.
    pub fn from_set_cookie(header: &str) -> Result<Self, ValidationError> {
        validate_set_cookie(header)?;
        let pair = header.split(';').next().unwrap_or_default().trim();
        match pair.split_once('=') {
            Some((name, value)) => Ok(Self::new_unchecked(
                name.trim().to_string(),
                value.trim().to_string(),
            )),
            None => Err(ValidationError::Format(
                "Cookie must have the form name=value".to_string(),
            )),
        }
    }

    /// Returns the cookie name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formats the cookie as a `Cookie` request header value.
    #[must_use]
    pub fn as_cookie_header(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

/// Validates the format of a `Set-Cookie` header value.
pub(crate) fn validate_set_cookie(header: &str) -> Result<(), ValidationError> {
    let pair = header.split(';').next().unwrap_or_default().trim();
    if pair.is_empty() {
        return Err(ValidationError::Field {
            field: "cookie".to_string(),
            message: "Cookie cannot be empty".to_string(),
        });
    }
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Format(
            "Cookie must have the form name=value".to_string(),
        )),
    }
}
