//! The capacity report: gate the endpoint, resolve the cluster, query and
//! format.

pub mod format;
pub mod gate;
pub mod report;

use crate::core::domain::{
    error::VsanResult,
    model::{
        about_info::AboutInfo, capacity_summary::CapacitySummary,
        managed_object::ManagedObjectReference,
    },
};
use async_trait::async_trait;

/// The remote operations the capacity report depends on.
///
/// Implemented by [`crate::VsanSession`]; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VsanApi: Send + Sync {
    /// The endpoint's self-description.
    async fn about(&self) -> VsanResult<AboutInfo>;

    /// Finds a cluster by name across all datacenters.
    async fn find_cluster(&self, name: &str) -> VsanResult<Option<ManagedObjectReference>>;

    /// Reads the VSAN capacity of a resolved cluster.
    async fn query_space_usage(
        &self,
        cluster: &ManagedObjectReference,
    ) -> VsanResult<CapacitySummary>;
}
