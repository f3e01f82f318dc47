use crate::core::{
    domain::{
        error::{VsanError, VsanResult},
        model::vsphere_auth::UserSession,
    },
    infrastructure::xml::XmlNode,
};

/// `<LoginResponse><returnval>UserSession</returnval></LoginResponse>`
pub struct LoginResponse {
    pub user_session: UserSession,
}

impl TryFrom<&XmlNode> for LoginResponse {
    type Error = VsanError;

    fn try_from(node: &XmlNode) -> VsanResult<Self> {
        let returnval = node.require_child("returnval")?;
        Ok(Self {
            user_session: UserSession {
                key: returnval.require_text("key")?.to_string(),
                user_name: returnval.require_text("userName")?.to_string(),
                full_name: returnval
                    .child("fullName")
                    .map(XmlNode::text)
                    .unwrap_or_default()
                    .to_string(),
            },
        })
    }
}
