use crate::core::domain::error::ValidationError;

/// A vCenter login name, e.g. `administrator@vsphere.local` or `DOMAIN\user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsphereUsername(String);

impl VsphereUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a username. Only emptiness and control characters are
/// rejected; the directory behind vCenter owns every other rule.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Username cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}
