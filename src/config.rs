//! Client-level settings that are not part of the connection target.

/// Protocol settings shared by every request of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// vSphere API version advertised in the `SOAPAction` header of `/sdk` calls.
    pub vim_version: String,
    /// VSAN API version advertised in the `SOAPAction` header of `/vsanHealth` calls.
    pub vsan_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            vim_version: "6.0".to_string(),
            vsan_version: "6.2".to_string(),
        }
    }
}
