use crate::core::{
    domain::{
        error::{VsanError, VsanResult},
        model::managed_object::ManagedObjectReference,
    },
    infrastructure::xml::XmlNode,
};

/// `<FindChildResponse>` holds a `returnval` only when a child matched.
pub struct FindChildResponse {
    pub child: Option<ManagedObjectReference>,
}

impl TryFrom<&XmlNode> for FindChildResponse {
    type Error = VsanError;

    fn try_from(node: &XmlNode) -> VsanResult<Self> {
        let child = node.child("returnval").map(XmlNode::as_moref).transpose()?;
        Ok(Self { child })
    }
}
