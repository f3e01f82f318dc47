use crate::core::domain::{
    error::{VsanError, VsanResult},
    model::about_info::AboutInfo,
};

/// Oldest vCenter major version with the VSAN space report API.
pub const MIN_VCENTER_MAJOR: u32 = 6;

/// Outcome of inspecting the endpoint before any inventory call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// A vCenter recent enough to report VSAN capacity.
    Proceed,
    /// Not a vCenter (e.g. a standalone ESXi host). The report is skipped
    /// without an error.
    Skip,
}

/// Decides whether the capacity report can run against this endpoint.
///
/// # Errors
/// `VsanError::UnsupportedVersion` for a vCenter older than 6.0, and
/// `VsanError::Validation` when the API version has no numeric major part.
pub fn check_endpoint(about: &AboutInfo) -> VsanResult<Gate> {
    if !about.api_type.is_cluster_manager() {
        return Ok(Gate::Skip);
    }
    if about.api_version.major()? < MIN_VCENTER_MAJOR {
        return Err(VsanError::UnsupportedVersion {
            version: about.api_version.as_str().to_string(),
        });
    }
    Ok(Gate::Proceed)
}
