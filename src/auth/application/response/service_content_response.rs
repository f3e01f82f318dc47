use crate::core::{
    domain::{
        error::{VsanError, VsanResult},
        model::{
            about_info::{AboutInfo, ApiType},
            service_content::ServiceContent,
        },
        value_object::ApiVersion,
    },
    infrastructure::xml::XmlNode,
};

/// `<RetrieveServiceContentResponse><returnval>ServiceContent</returnval>`
pub struct ServiceContentResponse {
    pub content: ServiceContent,
}

impl TryFrom<&XmlNode> for ServiceContentResponse {
    type Error = VsanError;

    fn try_from(node: &XmlNode) -> VsanResult<Self> {
        let returnval = node.require_child("returnval")?;
        let about = returnval.require_child("about")?;
        let optional = |name: &str| {
            about
                .child(name)
                .map(XmlNode::text)
                .unwrap_or_default()
                .to_string()
        };

        let about = AboutInfo {
            name: optional("name"),
            full_name: optional("fullName"),
            vendor: optional("vendor"),
            version: optional("version"),
            build: optional("build"),
            api_type: ApiType::from(about.require_text("apiType")?),
            api_version: ApiVersion::new_unchecked(about.require_text("apiVersion")?.to_string()),
        };

        Ok(Self {
            content: ServiceContent {
                root_folder: returnval.require_moref("rootFolder")?,
                property_collector: returnval.require_moref("propertyCollector")?,
                session_manager: returnval.require_moref("sessionManager")?,
                search_index: returnval.require_moref("searchIndex")?,
                about,
            },
        })
    }
}
