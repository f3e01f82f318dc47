//! The endpoint's self-description (`ServiceContent.about`).

use crate::core::domain::value_object::ApiVersion;

/// The kind of product behind an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiType {
    /// A vCenter Server managing clusters.
    VirtualCenter,
    /// A standalone ESXi host.
    HostAgent,
    /// Anything else the endpoint may report.
    Other(String),
}

impl ApiType {
    pub fn is_cluster_manager(&self) -> bool {
        matches!(self, ApiType::VirtualCenter)
    }
}

impl From<&str> for ApiType {
    fn from(value: &str) -> Self {
        match value {
            "VirtualCenter" => ApiType::VirtualCenter,
            "HostAgent" => ApiType::HostAgent,
            other => ApiType::Other(other.to_string()),
        }
    }
}

/// Product identity reported by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    /// Short product name, e.g. `VMware VirtualCenter Server`.
    pub name: String,
    /// Product name with version and build.
    pub full_name: String,
    pub vendor: String,
    /// Product version, e.g. `6.7.0`.
    pub version: String,
    pub build: String,
    pub api_type: ApiType,
    pub api_version: ApiVersion,
}
