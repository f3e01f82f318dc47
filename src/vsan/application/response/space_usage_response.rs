use crate::core::{
    domain::{
        error::{VsanError, VsanResult},
        model::capacity_summary::CapacitySummary,
    },
    infrastructure::xml::XmlNode,
};

/// `<VsanQuerySpaceUsageResponse><returnval>VsanSpaceUsage</returnval>`
///
/// Only the two cluster-wide totals are read; the per-object breakdown
/// the endpoint also returns is ignored.
pub struct SpaceUsageResponse {
    pub summary: CapacitySummary,
}

impl TryFrom<&XmlNode> for SpaceUsageResponse {
    type Error = VsanError;

    fn try_from(node: &XmlNode) -> VsanResult<Self> {
        let returnval = node.require_child("returnval")?;
        Ok(Self {
            summary: CapacitySummary {
                total_capacity_b: returnval.require_i64("totalCapacityB")?,
                free_capacity_b: returnval.require_i64("freeCapacityB")?,
            },
        })
    }
}
