use std::fmt;

/// A vCenter password (plaintext, only held for the login call).
#[derive(Clone)]
pub struct VspherePassword(String);

impl VspherePassword {
    /// Creates a new password. Any value is accepted, including an empty one;
    /// the endpoint decides whether it is valid.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VspherePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VspherePassword(***)")
    }
}
