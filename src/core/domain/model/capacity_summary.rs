/// VSAN capacity of one cluster as reported by `VsanQuerySpaceUsage`.
///
/// Values are passed through exactly as the endpoint reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitySummary {
    /// Total capacity in bytes (`totalCapacityB`).
    pub total_capacity_b: i64,
    /// Free capacity in bytes (`freeCapacityB`).
    pub free_capacity_b: i64,
}
