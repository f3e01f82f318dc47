use thiserror::Error;

/// The main error type for vSphere and VSAN operations.
///
/// This enum represents all possible errors that can occur while talking to
/// a vCenter endpoint, including connection, authentication, validation,
/// remote faults and the two guard failures of the capacity report.
#[derive(Error, Debug)]
pub enum VsanError {
    /// Represents errors that occur during connection attempts
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the connection attempt
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// A SOAP fault raised by the endpoint
    ///
    /// # Fields
    /// * `code` - The `faultcode` reported by the server
    /// * `message` - The `faultstring` reported by the server
    #[error("Remote fault ({code}): {message}")]
    Fault { code: String, message: String },

    /// The endpoint answered with a document we could not understand
    #[error("Parse error: {0}")]
    Parse(String),

    /// The vCenter API major version is lower than 6
    #[error("The Virtual Center with version {version} (lower than 6.0) is not supported.")]
    UnsupportedVersion { version: String },

    /// No datacenter holds a cluster with the requested name
    #[error("Cluster {cluster} is not found for {host}")]
    ClusterNotFound { cluster: String, host: String },

    /// The task running inside a session was cancelled
    #[error("Session task failed: {0}")]
    Task(String),
}

impl VsanError {
    /// Returns true for the guard failures that the command line reports on
    /// standard output with exit status -1.
    pub fn is_guard_failure(&self) -> bool {
        matches!(
            self,
            VsanError::UnsupportedVersion { .. } | VsanError::ClusterNotFound { .. }
        )
    }
}

impl From<ValidationError> for VsanError {
    fn from(error: ValidationError) -> Self {
        VsanError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a VsanError
pub type VsanResult<T> = Result<T, VsanError>;
