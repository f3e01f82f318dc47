use crate::{
    core::{
        domain::{
            error::VsanResult,
            model::{capacity_summary::CapacitySummary, managed_object::ManagedObjectReference},
        },
        infrastructure::api_client::ApiClient,
    },
    vsan::application::{
        request::space_usage_request::SpaceUsageRequest,
        response::space_usage_response::SpaceUsageResponse,
    },
};
use tracing::debug;

/// Reads the VSAN capacity of a cluster with one `VsanQuerySpaceUsage` call.
pub struct SpaceReportService;

impl SpaceReportService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        api_client: &ApiClient,
        cluster: &ManagedObjectReference,
    ) -> VsanResult<CapacitySummary> {
        let request = SpaceUsageRequest { cluster }.into_soap();
        let node = api_client.invoke(&request).await?;
        let summary = SpaceUsageResponse::try_from(&node)?.summary;
        debug!(
            %cluster,
            total = summary.total_capacity_b,
            free = summary.free_capacity_b,
            "space usage received"
        );
        Ok(summary)
    }
}

impl Default for SpaceReportService {
    fn default() -> Self {
        Self::new()
    }
}
