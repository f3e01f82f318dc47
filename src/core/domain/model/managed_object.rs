//! Managed object references, the handles vSphere uses for remote objects.

use std::fmt;

/// A `(type, value)` pair naming a server-side object, e.g.
/// `ClusterComputeResource:domain-c7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagedObjectReference {
    kind: String,
    value: String,
}

impl ManagedObjectReference {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// The managed object type, e.g. `Datacenter`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The server-assigned identifier, e.g. `datacenter-2`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// Well-known references that exist on every vCenter.
pub mod well_known {
    use super::ManagedObjectReference;

    pub fn service_instance() -> ManagedObjectReference {
        ManagedObjectReference::new("ServiceInstance", "ServiceInstance")
    }

    pub fn vsan_space_report_system() -> ManagedObjectReference {
        ManagedObjectReference::new("VsanSpaceReportSystem", "vsan-cluster-space-report-system")
    }
}
