use crate::core::{
    domain::model::managed_object::ManagedObjectReference,
    infrastructure::envelope::{SoapEndpoint, SoapRequest, moref_element},
};
use quick_xml::escape::escape;

/// `PropertyCollector.RetrieveProperties` for a single property of a single
/// object.
pub struct RetrievePropertiesRequest<'a> {
    pub obj: &'a ManagedObjectReference,
    pub path: &'a str,
}

impl RetrievePropertiesRequest<'_> {
    pub fn into_soap(self, property_collector: &ManagedObjectReference) -> SoapRequest {
        let spec = format!(
            "<specSet><propSet><type>{}</type><pathSet>{}</pathSet></propSet>\
             <objectSet>{}</objectSet></specSet>",
            escape(self.obj.kind()),
            escape(self.path),
            moref_element("obj", self.obj),
        );
        SoapRequest::new(SoapEndpoint::Vim, "RetrieveProperties", property_collector)
            .fragment(&spec)
    }
}
