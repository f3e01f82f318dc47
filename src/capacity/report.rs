use crate::{
    capacity::{
        VsanApi,
        format::natural_size,
        gate::{Gate, check_endpoint},
    },
    core::domain::{
        error::{VsanError, VsanResult},
        model::{about_info::ApiType, capacity_summary::CapacitySummary},
    },
};
use std::fmt;
use tracing::debug;

/// Capacity of one named cluster, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub cluster_name: String,
    pub summary: CapacitySummary,
}

impl fmt::Display for CapacityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cluster {}", self.cluster_name)?;
        writeln!(
            f,
            "  Total Capacity: {}",
            natural_size(self.summary.total_capacity_b)
        )?;
        writeln!(
            f,
            "  Free Capacity: {}",
            natural_size(self.summary.free_capacity_b)
        )
    }
}

/// What a report run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Reported(CapacityReport),
    /// The endpoint is not a vCenter. Nothing was queried and nothing is
    /// printed; this mirrors the long-standing behaviour of the tool even
    /// though the other guards fail loudly.
    Skipped { api_type: ApiType },
}

/// Runs the capacity report against an open session.
///
/// Call order is fixed: `about`, then `find_cluster`, then
/// `query_space_usage`. The query is never issued when a guard fails.
///
/// # Errors
/// `VsanError::UnsupportedVersion` for a vCenter older than 6.0,
/// `VsanError::ClusterNotFound` when no datacenter holds `cluster_name`, and
/// any error of the underlying calls.
pub async fn run_report<A>(api: &A, cluster_name: &str, host: &str) -> VsanResult<ReportOutcome>
where
    A: VsanApi + ?Sized,
{
    let about = api.about().await?;
    if check_endpoint(&about)? == Gate::Skip {
        debug!(api_type = ?about.api_type, "endpoint is not a vCenter, skipping report");
        return Ok(ReportOutcome::Skipped {
            api_type: about.api_type,
        });
    }

    let cluster = api
        .find_cluster(cluster_name)
        .await?
        .ok_or_else(|| VsanError::ClusterNotFound {
            cluster: cluster_name.to_string(),
            host: host.to_string(),
        })?;

    let summary = api.query_space_usage(&cluster).await?;
    Ok(ReportOutcome::Reported(CapacityReport {
        cluster_name: cluster_name.to_string(),
        summary,
    }))
}
