use crate::{
    core::{
        domain::{
            error::VsanResult,
            model::{managed_object::ManagedObjectReference, service_content::ServiceContent},
        },
        infrastructure::api_client::ApiClient,
    },
    inventory::application::{
        request::{
            find_child_request::FindChildRequest,
            retrieve_properties_request::RetrievePropertiesRequest,
        },
        response::{find_child_response::FindChildResponse, property_response::PropertyResponse},
    },
};
use tracing::debug;

/// Resolves a cluster by name: datacenters under the root folder, then a
/// `FindChild` in each datacenter's host folder.
pub struct ClusterLookupService;

impl ClusterLookupService {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first cluster named `name`, searching datacenters in the
    /// order the endpoint lists them.
    pub async fn execute(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
        name: &str,
    ) -> VsanResult<Option<ManagedObjectReference>> {
        for datacenter in self.datacenters(api_client, content).await? {
            let host_folder = self.host_folder(api_client, content, &datacenter).await?;
            if let Some(cluster) = self.find_child(api_client, content, &host_folder, name).await? {
                debug!(%cluster, %datacenter, "cluster resolved");
                return Ok(Some(cluster));
            }
        }
        debug!(name, "no datacenter holds the cluster");
        Ok(None)
    }

    /// Datacenters directly below the root folder. Nested folders are skipped.
    pub async fn datacenters(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
    ) -> VsanResult<Vec<ManagedObjectReference>> {
        let children = self
            .retrieve_property(api_client, content, &content.root_folder, "childEntity")
            .await?
            .into_morefs()?;

        Ok(children
            .into_iter()
            .filter(|child| {
                let keep = child.is_kind("Datacenter");
                if !keep {
                    debug!(%child, "skipping root folder child that is not a datacenter");
                }
                keep
            })
            .collect())
    }

    pub async fn host_folder(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
        datacenter: &ManagedObjectReference,
    ) -> VsanResult<ManagedObjectReference> {
        self.retrieve_property(api_client, content, datacenter, "hostFolder")
            .await?
            .into_moref("hostFolder")
    }

    /// `SearchIndex.FindChild`: a direct child of `parent` with the given name.
    /// Matching rules are the endpoint's.
    pub async fn find_child(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
        parent: &ManagedObjectReference,
        name: &str,
    ) -> VsanResult<Option<ManagedObjectReference>> {
        let request = FindChildRequest {
            entity: parent,
            name,
        }
        .into_soap(&content.search_index);
        let node = api_client.invoke(&request).await?;
        Ok(FindChildResponse::try_from(&node)?.child)
    }

    async fn retrieve_property(
        &self,
        api_client: &ApiClient,
        content: &ServiceContent,
        obj: &ManagedObjectReference,
        path: &str,
    ) -> VsanResult<PropertyResponse> {
        let request = RetrievePropertiesRequest { obj, path }.into_soap(&content.property_collector);
        let node = api_client.invoke(&request).await?;
        Ok(PropertyResponse::from_node(&node, path))
    }
}

impl Default for ClusterLookupService {
    fn default() -> Self {
        Self::new()
    }
}
