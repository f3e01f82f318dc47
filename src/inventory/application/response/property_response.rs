use crate::core::{
    domain::{
        error::{VsanError, VsanResult},
        model::managed_object::ManagedObjectReference,
    },
    infrastructure::xml::XmlNode,
};

/// The value of one property read through `RetrieveProperties`.
///
/// The collector omits unset properties and objects it cannot see, so the
/// value is optional.
pub struct PropertyResponse {
    value: Option<XmlNode>,
}

impl PropertyResponse {
    pub fn from_node(node: &XmlNode, path: &str) -> Self {
        let value = node
            .children("returnval")
            .flat_map(|returnval| returnval.children("propSet"))
            .find(|prop| prop.child("name").map(XmlNode::text) == Some(path))
            .and_then(|prop| prop.child("val"))
            .cloned();
        Self { value }
    }

    /// Reads an `ArrayOfManagedObjectReference` value. A missing value is an
    /// empty list.
    pub fn into_morefs(self) -> VsanResult<Vec<ManagedObjectReference>> {
        match self.value {
            Some(val) => val
                .children("ManagedObjectReference")
                .map(XmlNode::as_moref)
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Reads a single `ManagedObjectReference` value.
    pub fn into_moref(self, path: &str) -> VsanResult<ManagedObjectReference> {
        self.value
            .ok_or_else(|| VsanError::Parse(format!("Property '{}' was not returned", path)))?
            .as_moref()
    }
}
