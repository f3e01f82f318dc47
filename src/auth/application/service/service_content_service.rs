use crate::{
    auth::application::response::service_content_response::ServiceContentResponse,
    core::{
        domain::{
            error::VsanResult,
            model::{managed_object::well_known, service_content::ServiceContent},
        },
        infrastructure::{
            api_client::ApiClient,
            envelope::{SoapEndpoint, SoapRequest},
        },
    },
};
use tracing::debug;

/// Fetches `ServiceInstance.content`, the entry point to every other call.
pub struct ServiceContentService;

impl ServiceContentService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, api_client: &ApiClient) -> VsanResult<ServiceContent> {
        let request = SoapRequest::new(
            SoapEndpoint::Vim,
            "RetrieveServiceContent",
            &well_known::service_instance(),
        );
        let node = api_client.invoke(&request).await?;
        let content = ServiceContentResponse::try_from(&node)?.content;
        debug!(
            product = %content.about.full_name,
            api_type = ?content.about.api_type,
            api_version = content.about.api_version.as_str(),
            "retrieved service content"
        );
        Ok(content)
    }
}

impl Default for ServiceContentService {
    fn default() -> Self {
        Self::new()
    }
}
