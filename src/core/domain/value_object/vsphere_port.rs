/// The port vCenter listens on for SOAP traffic.
pub const DEFAULT_PORT: u16 = 443;

/// An endpoint port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VspherePort(u16);

impl VspherePort {
    /// Creates a new port without validation.
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}
