use crate::core::{
    domain::model::managed_object::{ManagedObjectReference, well_known},
    infrastructure::envelope::{SoapEndpoint, SoapRequest},
};

/// `VsanSpaceReportSystem.VsanQuerySpaceUsage(cluster)` on the VSAN service.
pub struct SpaceUsageRequest<'a> {
    pub cluster: &'a ManagedObjectReference,
}

impl SpaceUsageRequest<'_> {
    pub fn into_soap(self) -> SoapRequest {
        SoapRequest::new(
            SoapEndpoint::Vsan,
            "VsanQuerySpaceUsage",
            &well_known::vsan_space_report_system(),
        )
        .moref("cluster", self.cluster)
    }
}
