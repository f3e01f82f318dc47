//! An authenticated vCenter session.

use crate::{
    auth::application::service::logout_service::LogoutService,
    capacity::VsanApi,
    core::{
        domain::{
            error::VsanResult,
            model::{
                about_info::AboutInfo, capacity_summary::CapacitySummary,
                managed_object::ManagedObjectReference, service_content::ServiceContent,
                vsphere_auth::UserSession,
            },
        },
        infrastructure::api_client::ApiClient,
    },
    inventory::application::service::cluster_lookup_service::ClusterLookupService,
    vsan::application::service::space_report_service::SpaceReportService,
};
use async_trait::async_trait;
use std::sync::Arc;

/// A logged-in session, cheap to clone.
///
/// Obtained from [`crate::VsanClient::connect`] or, with guaranteed logout,
/// from [`crate::VsanClient::with_session`].
#[derive(Debug, Clone)]
pub struct VsanSession {
    api_client: Arc<ApiClient>,
    content: Arc<ServiceContent>,
}

impl VsanSession {
    pub(crate) fn new(api_client: Arc<ApiClient>, content: ServiceContent) -> Self {
        Self {
            api_client,
            content: Arc::new(content),
        }
    }

    /// The service content retrieved when the session was opened.
    pub fn service_content(&self) -> &ServiceContent {
        &self.content
    }

    /// The user the endpoint logged in, while the session is open.
    pub async fn user_session(&self) -> Option<UserSession> {
        self.api_client
            .auth()
            .await
            .map(|auth| auth.user_session().clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.api_client.is_authenticated().await
    }

    /// Closes the session. Calling it on a closed session does nothing.
    pub async fn logout(&self) -> VsanResult<()> {
        LogoutService::new()
            .execute(&self.api_client, &self.content)
            .await
    }
}

#[async_trait]
impl VsanApi for VsanSession {
    async fn about(&self) -> VsanResult<AboutInfo> {
        Ok(self.content.about.clone())
    }

    async fn find_cluster(&self, name: &str) -> VsanResult<Option<ManagedObjectReference>> {
        ClusterLookupService::new()
            .execute(&self.api_client, &self.content, name)
            .await
    }

    async fn query_space_usage(
        &self,
        cluster: &ManagedObjectReference,
    ) -> VsanResult<CapacitySummary> {
        SpaceReportService::new()
            .execute(&self.api_client, cluster)
            .await
    }
}
