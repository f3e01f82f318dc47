use crate::core::{
    domain::model::managed_object::ManagedObjectReference,
    infrastructure::envelope::{SoapEndpoint, SoapRequest},
};

/// `SearchIndex.FindChild(entity, name)`: a direct child of `entity` by name.
pub struct FindChildRequest<'a> {
    pub entity: &'a ManagedObjectReference,
    pub name: &'a str,
}

impl FindChildRequest<'_> {
    pub fn into_soap(self, search_index: &ManagedObjectReference) -> SoapRequest {
        SoapRequest::new(SoapEndpoint::Vim, "FindChild", search_index)
            .moref("entity", self.entity)
            .text("name", self.name)
    }
}
