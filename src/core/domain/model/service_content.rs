use crate::core::domain::model::{about_info::AboutInfo, managed_object::ManagedObjectReference};

/// The subset of `ServiceInstance.content` the client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContent {
    pub root_folder: ManagedObjectReference,
    pub property_collector: ManagedObjectReference,
    pub session_manager: ManagedObjectReference,
    pub search_index: ManagedObjectReference,
    pub about: AboutInfo,
}
