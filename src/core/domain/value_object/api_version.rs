use crate::core::domain::error::ValidationError;

/// The `apiVersion` string an endpoint reports, e.g. `6.7.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    pub(crate) fn new_unchecked(version: String) -> Self {
        Self(version)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the component before the first dot as the major version.
    pub fn major(&self) -> Result<u32, ValidationError> {
        let major = self.0.split('.').next().unwrap_or_default().trim();
        major.parse::<u32>().map_err(|_| {
            ValidationError::Format(format!(
                "API version '{}' does not start with a numeric major version",
                self.0
            ))
        })
    }
}
